use cabinet_export::docx::generate_docx;
use cabinet_export::styles::DocumentStyles;

#[test]
fn produces_a_zip_container() {
    let body = "# DOSSIER PATIENT\n\n## Informations personnelles\n\n- **Nom :** Dupont\n\nTexte libre.\n";
    let bytes = generate_docx(body, &DocumentStyles::default()).unwrap();

    // DOCX files are ZIP archives.
    assert!(bytes.starts_with(b"PK"));
    assert!(bytes.len() > 500);
}

#[test]
fn handles_every_line_kind() {
    let body = "\
# Titre
## Sous-titre
### Détail
- puce avec **gras** dedans
Paragraphe avec **deux** segments **gras**.
---

Fin.
";
    let bytes = generate_docx(body, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn unbalanced_bold_marker_does_not_panic() {
    let body = "Un **marqueur sans fermeture\n**Autre ligne** avec **reste";
    let bytes = generate_docx(body, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn empty_content_still_packs() {
    let bytes = generate_docx("", &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn custom_styles_are_accepted() {
    let styles = DocumentStyles {
        body_font: "Garamond".to_string(),
        body_size: 12,
        heading1_size: 20,
        heading2_size: 16,
        heading3_size: 13,
    };
    let bytes = generate_docx("# Titre\n\nCorps.\n", &styles).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
