//! Read-facing user projection.
//!
//! Purpose: define the shape of user data an API serialises into response
//! bodies in place of the full internal user entity, so responses carry only
//! the fields clients need. The type is a transparent carrier; whatever
//! richer representation the source system keeps stays on its side of the
//! boundary.
//!
//! Public surface:
//! - UserProjection (alias to `user::UserProjection`) — identifier, display
//!   name, and contact address for one user.

pub mod user;

pub use self::user::UserProjection;
