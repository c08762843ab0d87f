use std::borrow::Cow;

use crate::project::Project;

static PROJECTS: [Project; 1] = [Project {
    title: Cow::Borrowed("Meal Compass"),
    description: Cow::Borrowed(
        "사내에서 매번 점심 메뉴 선정 때문에 골치가 아팠습니다. 이를 해결하기 위해 메뉴 추천 서비스를 만들었습니다. 사용자는 원하는 메뉴를 선택하면 랜덤으로 메뉴를 추천해주는 서비스입니다. 이외에도 카카오맵 연동 등 추가적인 기능들을 구현해뒀습니다. 한 번 사용해보세요 !",
    ),
    img_src: Some(Cow::Borrowed("/static/images/compass.png")),
    href: Some(Cow::Borrowed("https://meal-compass.cdd.co.kr")),
    self_authored: Some(true),
}];

/// The built-in showcase list, in display order.
pub fn projects_data() -> &'static [Project] {
    &PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_compass_is_the_only_entry() {
        let list = projects_data();
        assert_eq!(list.len(), 1);

        let p = &list[0];
        assert_eq!(p.title, "Meal Compass");
        assert!(!p.description.trim().is_empty());
        assert_eq!(p.self_authored, Some(true));
        assert_eq!(p.href(), Some("https://meal-compass.cdd.co.kr"));
        assert_eq!(p.img_src(), Some("/static/images/compass.png"));
    }

    #[test]
    fn repeated_reads_share_one_instance() {
        let a = projects_data();
        let b = projects_data();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }

    #[test]
    fn description_keeps_hangul() {
        let p = &projects_data()[0];
        assert!(p.description.starts_with("사내에서"));
        assert!(p.description.ends_with('!'));
    }
}
