// #![include_doc("../README.md", start)]
//! # flick
//!
//! [![Crates.io](https://img.shields.io/crates/v/flick.svg)](https://crates.io/crates/flick)
//! [![Docs.rs](https://docs.rs/flick/badge.svg)](https://docs.rs/flick/)
//!
//! `flick` is a render-agnostic toggle state controller designed to be used as a foundation for UI widgets.
//!
//! It manages a boolean on/off state that can be driven internally (uncontrolled) or externally by the caller (controlled), and hands that state to any presentation layer through composable property bundles instead of a fixed component hierarchy.
//!
//! ## Features
//!
//! - Reducer-driven state machine with a replaceable reducer
//! - Controlled/uncontrolled duality with runtime consistency diagnostics
//! - Prop getters that merge caller-supplied event handlers with the controller's own, caller first
//! - Explicit provider scope for broadcasting one controller to a call subtree
//! - Single-threaded, synchronous, no I/O
//!
//! ## Uncontrolled
//!
//! The controller owns the state. `toggle` flips it, `reset` restores the value captured at construction.
//!
//! ```rust
//! use flick::{PropOverrides, ToggleConfig, ToggleController};
//!
//! let toggle = ToggleController::new(ToggleConfig::new());
//! assert!(!toggle.value());
//!
//! let props = toggle.toggler_props::<()>(PropOverrides::new().on_click(|_| println!("clicked")));
//! props.click(&()); // prints "clicked", then toggles
//! assert!(toggle.value());
//!
//! toggle.reset();
//! assert!(!toggle.value());
//! ```
//!
//! ## Controlled
//!
//! The caller owns the value and learns about every dispatched action through `on_change`, including the hypothetical post-action state the controller did not apply.
//!
//! ```rust
//! use flick::{ToggleConfig, ToggleController};
//!
//! let toggle = ToggleController::new(
//!     ToggleConfig::new()
//!         .on(true)
//!         .on_change(|next, action| println!("next = {}, action = {action}", next.on)),
//! );
//!
//! toggle.toggle(); // prints "next = false, action = toggle"
//! assert!(toggle.value()); // still true: the caller decides what happens next
//! ```
//!
//! A controlled toggle without an `on_change` handler behaves as read-only; the controller reports this through its diagnostics sink unless `read_only(true)` acknowledges it.
//!
//! ## Broadcasting
//!
//! `ToggleScope` propagates one controller to descendants without threading it through every call.
//!
//! ```rust
//! use flick::{ToggleConfig, ToggleController, ToggleScope};
//!
//! let toggle = ToggleController::new(ToggleConfig::new());
//! let _scope = ToggleScope::enter(&toggle);
//!
//! ToggleScope::with(|toggle| toggle.toggle());
//! assert!(toggle.value());
//! ```
//!
//! Reading the scope with no active provider panics: that is a programmer error, not a runtime condition.
//!
//! ## License
//!
//! This project is dual licensed under Apache-2.0/MIT. See the two LICENSE-\* files for details.
//!
//! ## Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.
// #![include_doc("../README.md", end)]
