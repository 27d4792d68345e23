//! Browser checks for the DOM surface.  Run with
//! `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::Document;

use report_portal_frontend::components::dom_surface::DomSurface;
use report_portal_frontend::models::{SurfaceId, Theme, TriggerId, UiStage};
use report_portal_frontend::surface::PresentationSurface;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fixture(html: &str) -> Document {
    let doc = document();
    doc.body().unwrap().set_inner_html(html);
    doc
}

#[wasm_bindgen_test]
fn busy_trigger_is_disabled_and_restored() {
    let doc = fixture(r#"<button data-trigger="report-submit">Send report</button>"#);
    let surface = DomSurface::new(doc.clone());
    let trigger = TriggerId::new("report-submit");
    let button = doc.query_selector("[data-trigger]").unwrap().unwrap();

    surface.set_trigger_busy(&trigger, true).unwrap();
    assert!(button.has_attribute("disabled"));
    assert!(button.inner_html().contains("spinner"));

    surface.set_trigger_busy(&trigger, false).unwrap();
    assert!(!button.has_attribute("disabled"));
    assert_eq!(button.inner_html(), "Send report");
}

#[wasm_bindgen_test]
fn stage_switches_visible_part_and_sets_text() {
    let doc = fixture(
        r#"<div id="reportResult" class="hidden">
             <div class="result-loading"></div>
             <div class="result-success"></div>
             <div class="result-error"><h4 class="result-title"></h4><p class="result-message"></p></div>
           </div>"#,
    );
    let surface = DomSurface::new(doc.clone());

    surface
        .show_stage(SurfaceId::ReportResult, UiStage::Error, Some("Rejected"), Some("<b>too long</b>"))
        .unwrap();

    let container = doc.get_element_by_id("reportResult").unwrap();
    let error = doc.query_selector(".result-error").unwrap().unwrap();
    let loading = doc.query_selector(".result-loading").unwrap().unwrap();
    assert!(container.class_list().contains("visible"));
    assert!(error.class_list().contains("visible"));
    assert!(loading.class_list().contains("hidden"));
    // Remote text is never interpreted as markup.
    let message = doc.query_selector(".result-message").unwrap().unwrap();
    assert_eq!(message.text_content().unwrap(), "<b>too long</b>");
    assert!(doc.query_selector(".result-message b").unwrap().is_none());

    surface.show_stage(SurfaceId::ReportResult, UiStage::Idle, None, None).unwrap();
    assert!(container.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn counters_are_addressed_by_name_and_report() {
    let doc = fixture(
        r#"<span data-reaction-count="agree" data-report-id="7">3</span>
           <span data-reaction-count="agree" data-report-id="8">9</span>"#,
    );
    DomSurface::new(doc.clone()).set_counter("agree", "7", 4).unwrap();

    let spans = doc.query_selector_all("[data-reaction-count]").unwrap();
    assert_eq!(spans.item(0).unwrap().text_content().unwrap(), "4");
    assert_eq!(spans.item(1).unwrap().text_content().unwrap(), "9");
}

#[wasm_bindgen_test]
fn theme_sets_body_attribute_and_icon() {
    let doc = fixture(r#"<i id="themeIcon" class="fas fa-moon"></i>"#);
    DomSurface::new(doc.clone()).apply_theme(Theme::Light).unwrap();

    assert_eq!(doc.body().unwrap().get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(doc.get_element_by_id("themeIcon").unwrap().class_name(), "fas fa-sun");
}

#[wasm_bindgen_test]
fn toast_styles_go_into_head() {
    let doc = fixture("");
    DomSurface::new(doc.clone()).toast(false, "Gagal memuat reaksi").unwrap();

    let style = doc.get_element_by_id("toast-styles").unwrap();
    assert_eq!(style.parent_element().unwrap().tag_name(), "HEAD");
    let toast = doc.query_selector("#toast-root .toast-error").unwrap().unwrap();
    assert_eq!(toast.text_content().unwrap(), "Gagal memuat reaksi");
}
