//! # Copulas
//!
//! $$
//! c(u,v)=\frac{\partial^2 C(u,v)}{\partial u\,\partial v}
//! $$
//!
pub mod normal;
