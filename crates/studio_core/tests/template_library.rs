use studio_core::{
    CategoryChoice, ColorId, IconId, IconPool, InMemoryTemplateRepository, NewTemplate,
    TemplateService, TemplateServiceError,
};
use uuid::Uuid;

fn new_template(title: &str, category: CategoryChoice) -> NewTemplate {
    NewTemplate {
        title: title.to_string(),
        category,
        description: "desc".to_string(),
        content: "Do the thing with [input].".to_string(),
    }
}

#[test]
fn library_starts_with_four_seeded_templates() {
    let service = TemplateService::with_defaults();
    let titles: Vec<&str> = service
        .list_templates()
        .iter()
        .map(|template| template.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Code Review",
            "Creative Writing",
            "Learning Assistant",
            "Brainstorming Session"
        ]
    );

    let sections = service.search("");
    assert_eq!(sections.favorites.len(), 1);
    assert_eq!(sections.favorites[0].title, "Creative Writing");
    assert_eq!(sections.others.len(), 3);
}

#[test]
fn create_derives_icon_and_color_and_appends() {
    let mut service = TemplateService::with_defaults();
    let created = service
        .create_template(new_template(
            "Weekly team meeting notes",
            CategoryChoice::Predefined("Business".to_string()),
        ))
        .unwrap();

    assert_eq!(created.icon, IconId::Users);
    assert_eq!(created.color, ColorId::Green);
    assert!(!created.favorite);
    assert_eq!(service.list_templates().last().unwrap().id, created.id);
}

#[test]
fn custom_category_is_trimmed_before_coloring() {
    let mut service = TemplateService::with_defaults();
    let created = service
        .create_template(new_template(
            "Budget forecast",
            CategoryChoice::Custom("  Finance  ".to_string()),
        ))
        .unwrap();
    assert_eq!(created.category, "Finance");
    assert_eq!(created.color, ColorId::Green);
    assert_eq!(service.preview_color("Finance"), created.color);
}

#[test]
fn successive_creations_do_not_reuse_icons() {
    let mut service = TemplateService::new(InMemoryTemplateRepository::new());
    let first = service
        .create_template(new_template(
            "Health check",
            CategoryChoice::Custom("Ops".to_string()),
        ))
        .unwrap();
    let second = service
        .create_template(new_template(
            "Health report",
            CategoryChoice::Custom("Ops".to_string()),
        ))
        .unwrap();

    assert_eq!(first.icon, IconId::Heart);
    assert_ne!(second.icon, IconId::Heart);
    assert_eq!(second.icon, IconId::FileText);
}

#[test]
fn deleting_a_template_frees_its_icon() {
    let pool = IconPool::new([IconId::Heart, IconId::Coffee]).unwrap();
    let mut service = TemplateService::with_pool(InMemoryTemplateRepository::new(), pool);
    let first = service
        .create_template(new_template(
            "Health tips",
            CategoryChoice::Custom("Life".to_string()),
        ))
        .unwrap();
    assert_eq!(first.icon, IconId::Heart);
    assert_ne!(service.preview_icon("Health tips"), IconId::Heart);

    service.delete_template(first.id).unwrap();
    assert_eq!(service.preview_icon("Health tips"), IconId::Heart);
}

#[test]
fn create_rejects_incomplete_requests() {
    let mut service = TemplateService::with_defaults();
    let mut blank_title = new_template("  ", CategoryChoice::Predefined("Writing".to_string()));
    assert_eq!(
        service.create_template(blank_title.clone()).unwrap_err(),
        TemplateServiceError::MissingTitle
    );

    blank_title.title = "Title".to_string();
    blank_title.content = String::new();
    assert_eq!(
        service.create_template(blank_title).unwrap_err(),
        TemplateServiceError::MissingContent
    );

    assert_eq!(
        service
            .create_template(new_template("Title", CategoryChoice::Custom(" ".to_string())))
            .unwrap_err(),
        TemplateServiceError::MissingCategory
    );
    assert_eq!(service.list_templates().len(), 4);
}

#[test]
fn favorite_toggle_and_search_sections() {
    let mut service = TemplateService::with_defaults();
    let code_review = service.list_templates()[0].id;

    assert!(service.toggle_favorite(code_review).unwrap());
    let sections = service.search("REVIEW");
    assert_eq!(sections.favorites.len(), 1);
    assert!(sections.others.is_empty());

    assert!(!service.toggle_favorite(code_review).unwrap());
    let sections = service.search("education");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections.others[0].title, "Learning Assistant");

    assert!(service.search("no such template").is_empty());
}

#[test]
fn unknown_ids_surface_not_found() {
    let mut service = TemplateService::with_defaults();
    let missing = Uuid::new_v4();
    assert_eq!(
        service.toggle_favorite(missing).unwrap_err(),
        TemplateServiceError::TemplateNotFound(missing)
    );
    assert_eq!(
        service.delete_template(missing).unwrap_err(),
        TemplateServiceError::TemplateNotFound(missing)
    );
}
