use crate::catalog::Catalog;

pub fn handle_catalog_command(
    catalog: &Catalog,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    print!("{}", render_catalog(catalog));
    Ok(())
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = format!("{} Fragen\n", catalog.len());
    for (i, question) in catalog.questions().iter().enumerate() {
        let kind = if question.multi_select { " (Mehrfachauswahl)" } else { "" };
        out.push_str(&format!("\n{}. {}{}\n", i + 1, question.text, kind));
        for option in &question.options {
            out.push_str(&format!("   [{}] {}\n", option.category.tag(), option.text));
        }
    }
    out
}
