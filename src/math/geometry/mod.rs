// src/math/geometry/mod.rs

pub mod delaunay;
pub mod fit;
pub mod mesh;
pub mod proximity;

pub use self::delaunay::{IndexTriple, SpadeTriangulator, Triangulator};
pub use self::fit::{fit_cover, image_uv};
pub use self::mesh::{MeshBuilder, Triangle, TriangleMesh};
pub use self::proximity::ProximityIndex;
