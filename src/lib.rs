//! Lumapath path tracer
//!
//! A recursive CPU path tracer in the classic sphere-scene style: rays are
//! fired through each pixel, intersected against the scene, and bounced
//! through material scattering until they escape to the sky or run out of
//! recursion budget. Outputs PNG (gamma corrected) and EXR (linear HDR).

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod random;
pub mod ray;
pub mod sphere;
