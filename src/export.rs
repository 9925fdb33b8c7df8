//! Build-time rendering of the landing page for plain static hosting.
//!
//! The page is rendered once with the menu closed. The stylesheet and the menu
//! toggle script are inlined; everything else under `assets/` is copied next to
//! `index.html`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use askama::Template;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{DropdownMenu, MenuState, Navbar};
use crate::content::anchors;
use crate::views::Home;

const MAIN_CSS: &str = include_str!("../assets/styling/main.css");
const MENU_TOGGLE_JS: &str = include_str!("../assets/menu-toggle.js");

/// Where the copied favicon ends up, relative to `index.html`.
pub const FAVICON_HREF: &str = "assets/favicon.svg";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    title: &'a str,
    favicon: &'a str,
    css: &'a str,
    body: &'a str,
    dropdown: &'a str,
    open_glyph: &'a str,
    closed_glyph: &'a str,
    script: &'a str,
}

/// The home route under the navbar, without the router shell.
#[component]
pub fn StaticPage() -> Element {
    rsx! {
        Navbar {}
        main { id: anchors::HOME, Home {} }
    }
}

fn render_component(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render only the page body markup.
pub fn render_body() -> String {
    render_component(StaticPage)
}

/// Render a complete HTML document with the given `<title>`.
///
/// The dropdown markup ships inside a `<template>` so the inline script can
/// insert it when the toggle is activated.
pub fn render_document(title: &str) -> Result<String> {
    let body = render_body();
    let dropdown = render_component(DropdownMenu);

    let page = IndexPage {
        title,
        favicon: FAVICON_HREF,
        css: MAIN_CSS,
        body: &body,
        dropdown: &dropdown,
        open_glyph: MenuState::Open.glyph(),
        closed_glyph: MenuState::Closed.glyph(),
        script: MENU_TOGGLE_JS,
    };
    page.render().context("failed to render index.html")
}

/// Recursively copy `src` into `dest`, returning the number of files copied.
pub fn copy_assets(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest).with_context(|| format!("failed to create {}", dest.display()))?;

    let mut copied = 0;
    let entries = fs::read_dir(src).with_context(|| format!("failed to read {}", src.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {}", src.display()))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copied += copy_assets(&from, &to)?;
        } else {
            fs::copy(&from, &to)
                .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))?;
            debug!(from = %from.display(), to = %to.display(), "copied asset");
            copied += 1;
        }
    }
    Ok(copied)
}

/// What [`export_site`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub index: PathBuf,
    pub index_bytes: usize,
    pub assets_copied: usize,
}

/// Write `index.html` into `out_dir` and copy `assets_dir` to `out_dir/assets`.
pub fn export_site(out_dir: &Path, assets_dir: &Path, title: &str) -> Result<ExportReport> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let html = render_document(title)?;
    let index = out_dir.join("index.html");
    fs::write(&index, &html).with_context(|| format!("failed to write {}", index.display()))?;

    let assets_copied = copy_assets(assets_dir, &out_dir.join("assets"))?;

    Ok(ExportReport {
        index,
        index_bytes: html.len(),
        assets_copied,
    })
}
