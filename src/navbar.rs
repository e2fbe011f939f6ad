use crate::core::tracker::{ObserverOptions, SectionTracker, VisibilityChange};
use crate::dom;
use crate::observe;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hamburger menu plus active-section highlighting of the nav links.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let hamburger: web::Element = dom::require_id(document, "hamburger")?;
    let nav_menu: web::Element = dom::require_id(document, "nav-menu")?;
    let nav_links: Vec<web::Element> = dom::require_all(document, ".nav-link")?;
    let sections: Vec<web::Element> = dom::query_all(document, "section")?;

    wire_menu(&hamburger, &nav_menu, &nav_links);

    let observed: Vec<web::Element> = sections.into_iter().filter(|s| !s.id().is_empty()).collect();
    let options = ObserverOptions::sections();
    let tracker = Rc::new(RefCell::new(SectionTracker::new(
        observed.iter().map(|s| s.id()),
        options.threshold,
    )));
    log::info!("[nav] tracking {} sections", tracker.borrow().len());

    let doc = document.clone();
    observe::observe(&observed, options, move |batch, _| {
        let ids: Vec<String> = batch.iter().map(|e| e.target().id()).collect();
        let changes: Vec<VisibilityChange<'_>> = batch
            .iter()
            .zip(&ids)
            .map(|(e, id)| VisibilityChange {
                id: id.as_str(),
                intersecting: e.is_intersecting(),
                ratio: e.intersection_ratio(),
            })
            .collect();
        let mut tracker = tracker.borrow_mut();
        match tracker.apply(&changes) {
            Some(active) => highlight(&doc, &nav_links, active),
            None => log::debug!("[nav] no visible section, keeping {:?}", tracker.active()),
        }
    })?;
    Ok(())
}

fn wire_menu(hamburger: &web::Element, nav_menu: &web::Element, nav_links: &[web::Element]) {
    let (h, m) = (hamburger.clone(), nav_menu.clone());
    dom::add_click_listener(hamburger, move || {
        _ = h.class_list().toggle("active");
        _ = m.class_list().toggle("active");
    });

    for link in nav_links {
        let (h, m) = (hamburger.clone(), nav_menu.clone());
        dom::add_click_listener(link, move || {
            _ = h.class_list().remove_1("active");
            _ = m.class_list().remove_1("active");
        });
    }
}

fn highlight(document: &web::Document, nav_links: &[web::Element], section_id: &str) {
    for link in nav_links {
        _ = link.class_list().remove_1("active");
    }
    let selector = format!("a[href=\"#{}\"]", section_id);
    if let Ok(Some(link)) = document.query_selector(&selector) {
        _ = link.class_list().add_1("active");
        log::debug!("[nav] active section #{}", section_id);
    }
}
