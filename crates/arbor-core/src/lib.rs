//! # Elements, Content, and the Render Loop
//!
//! Arbor builds immutable node descriptions out of a compact tag spec and
//! a content list, then keeps a rendered tree in sync with an observable
//! store. Three main pieces:
//!
//! - [`element`] — fold heterogeneous content into one [`Node`].
//! - [`Store`] — observable, transactional state container.
//! - [`attach`] — subscribe a view to the store and drive an external
//!   patcher.
//!
//! ## Building elements
//!
//! ```rust
//! use arbor_core::prelude::*;
//!
//! let node = element(
//!     "table .grid .tiny #main",
//!     (
//!         element("tr", element("td", "one")),
//!         classes([("wide", true)]),
//!     ),
//! );
//! let el = node.as_element().unwrap();
//! assert_eq!(el.tag, "table");
//! assert!(el.classes.contains("grid"));
//! assert!(el.classes.contains("wide"));
//! ```
//!
//! Content folds strictly left to right; for every map-shaped aspect the
//! later write wins per key. Booleans, `None` and `()` fold to nothing,
//! which keeps conditional children pleasant:
//!
//! ```rust
//! use arbor_core::prelude::*;
//!
//! let logged_in = false;
//! let node = element("nav", (
//!     element("span", "menu"),
//!     logged_in.then(|| element("a", "profile")),
//! ));
//! assert_eq!(node.as_element().unwrap().children.len(), 1);
//! ```
//!
//! ## Store
//!
//! [`Store`] is a cloneable handle to a piece of state:
//!
//! ```rust
//! use arbor_core::prelude::*;
//!
//! let count = Store::new(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Listeners are notified synchronously on every mutation; wrap batches in
//! [`Store::transaction`] to coalesce them into one dispatch. `Store::at`
//! projects a lens onto part of the state; writes through the projection
//! notify root subscribers.
//!
//! ## Attach
//!
//! ```rust
//! use arbor_core::prelude::*;
//!
//! // The identity closure stands in for a real diffing engine.
//! let session = attach(
//!     |_prev: Option<Node>, next: Node| next,
//!     0i32,
//!     |store: Store<i32>| move || element("p", store.get()),
//! );
//! session.store().set(3); // re-renders synchronously
//! ```
//!
//! `Session::reattach` hot-swaps the view function while preserving
//! state: the old subscription is cancelled first, the new container is
//! seeded with the current value, and the new view paints immediately.

pub mod content;
pub mod element;
pub mod lifecycle;
pub mod node;
pub mod prelude;
pub mod store;

mod tagspec;

pub use content::*;
pub use element::*;
pub use lifecycle::*;
pub use node::*;
pub use store::*;
