use crate::core::content::{GALLERY_IMAGES, GALLERY_VIDEOS};
use crate::core::gallery::{Gallery, MediaKind};
use crate::dom;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct Viewer {
    document: web::Document,
    el: web::Element,
    gallery: Rc<RefCell<Gallery>>,
}

impl Viewer {
    /// Replace whatever is shown with the current item.
    fn render(&self) {
        if let Err(e) = self.try_render() {
            log::error!("[gallery] render error: {:?}", e);
        }
    }

    fn try_render(&self) -> anyhow::Result<()> {
        self.el.set_inner_html("");
        let gallery = self.gallery.borrow();
        let item = gallery.current();
        let node: web::Element = match item.kind {
            MediaKind::Image => {
                let img: web::HtmlImageElement = self.create("img")?;
                img.set_src(item.src);
                img.into()
            }
            MediaKind::Video => {
                let video: web::HtmlVideoElement = self.create("video")?;
                video.set_src(item.src);
                video.set_controls(true);
                video.set_autoplay(true);
                video.into()
            }
        };
        self.el
            .append_child(&node)
            .map_err(|e| anyhow!("append media: {:?}", e))?;
        Ok(())
    }

    fn create<T: JsCast>(&self, tag: &str) -> anyhow::Result<T> {
        self.document
            .create_element(tag)
            .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?
            .dyn_into::<T>()
            .map_err(|e| anyhow!("{:?}", e))
    }

    fn update(&self, f: impl FnOnce(&mut Gallery)) {
        f(&mut *self.gallery.borrow_mut());
        self.render();
    }
}

/// Image/video gallery with mode buttons, prev/next and swipe.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let el: web::Element = dom::require_id(document, "mediaViewer")?;
    let prev_btn: web::Element = dom::require_id(document, "prevBtn")?;
    let next_btn: web::Element = dom::require_id(document, "nextBtn")?;
    let mode_btns: Vec<web::HtmlElement> = dom::query_all(document, ".mode-btn")?;

    let viewer = Viewer {
        document: document.clone(),
        el,
        gallery: Rc::new(RefCell::new(Gallery::new(GALLERY_IMAGES, GALLERY_VIDEOS)?)),
    };

    for btn in &mode_btns {
        let (v, all, this) = (viewer.clone(), mode_btns.clone(), btn.clone());
        dom::add_click_listener(btn, move || {
            let requested = this.dataset().get("mode").unwrap_or_default();
            let mode = match requested.parse::<MediaKind>() {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("[gallery] {}", e);
                    return;
                }
            };
            for b in &all {
                _ = b.class_list().remove_1("active");
            }
            _ = this.class_list().add_1("active");
            log::debug!("[gallery] mode {}", mode.as_str());
            v.update(|g| g.set_mode(mode));
        });
    }

    let v = viewer.clone();
    dom::add_click_listener(&prev_btn, move || v.update(Gallery::prev));
    let v = viewer.clone();
    dom::add_click_listener(&next_btn, move || v.update(Gallery::next));

    let v = viewer.clone();
    dom::listen::<web::TouchEvent>(&viewer.el, "touchstart", move |ev| {
        if let Some(t) = ev.touches().get(0) {
            v.gallery.borrow_mut().touch_start(t.client_x() as f64);
        }
    });
    let v = viewer.clone();
    dom::listen::<web::TouchEvent>(&viewer.el, "touchend", move |ev| {
        if let Some(t) = ev.changed_touches().get(0) {
            v.update(|g| g.touch_end(t.client_x() as f64));
        }
    });

    viewer.render();
    Ok(())
}
