use crate::config::Catalog;

pub fn build_report(catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str("portfolio projects (summary)\n");
    out.push_str("============================\n");
    out.push_str(&format!("source: {}\n", catalog.source()));
    out.push_str(&format!("count: {}\n", catalog.len()));

    if catalog.is_empty() {
        return out;
    }

    out.push('\n');
    for (i, p) in catalog.projects().iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} (link={} image={} self={})\n",
            i + 1,
            p.title,
            p.href().unwrap_or("-"),
            p.img_src().unwrap_or("-"),
            p.is_self()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_summary_lists_meal_compass() {
        let r = build_report(&Catalog::builtin());
        assert!(r.contains("source: built-in\n"));
        assert!(r.contains("count: 1\n"));
        assert!(r.contains(
            "  1. Meal Compass (link=https://meal-compass.cdd.co.kr image=/static/images/compass.png self=true)\n"
        ));
    }
}
