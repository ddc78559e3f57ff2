//! # HTML Output and the Headless Mount
//!
//! This crate gives Arbor trees an HTML image ([`to_html`]) and a
//! headless render target ([`Mount`]) that implements the core's `Patch`
//! contract, enough to drive the whole attach/render/reattach loop
//! without a browser or a GPU.
//!
//! ## Serialization
//!
//! ```rust
//! use arbor_core::prelude::*;
//! use arbor_html::to_html;
//!
//! assert_eq!(
//!     to_html(&element("table .grid12 .tiny #mainTable", ())),
//!     r#"<table id="mainTable" class="grid12 tiny"></table>"#
//! );
//!
//! assert_eq!(to_html(&element(".green", ())), r#"<div class="green"></div>"#);
//!
//! assert_eq!(
//!     to_html(&element("span", ("Announcement: ", element("em", "hello"), "!"))),
//!     "<span>Announcement: <em>hello</em>!</span>"
//! );
//! ```
//!
//! Dropped content is dropped here too:
//!
//! ```rust
//! use arbor_core::prelude::*;
//! use arbor_html::to_html;
//!
//! let x = 1;
//! let y = 2;
//! let largest = [(x > y).then_some("x largest"), (x < y).then_some("y largest")];
//! assert_eq!(to_html(&element("span", largest)), "<span>y largest</span>");
//! ```
//!
//! ## Driving a session
//!
//! ```rust
//! use arbor_core::prelude::*;
//! use arbor_html::{Mount, attach};
//!
//! let mount = Mount::new();
//! let session = attach(&mount, 0i32, |store: Store<i32>| {
//!     move || element("p #count", store.get())
//! });
//! assert_eq!(mount.html(), r#"<p id="count">0</p>"#);
//!
//! session.store().set(3);
//! assert_eq!(mount.html(), r#"<p id="count">3</p>"#);
//! ```

pub mod mount;
pub mod render;

pub use mount::{DispatchError, Mount, attach};
pub use render::to_html;
