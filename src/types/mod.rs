mod builder;
mod builders;
mod scalar;
mod structure;
mod value;

pub use builder::{Builder, Iter, Members};
pub use builders::{array_to_indexed_object, indexed_object_to_array, Builders};
pub use scalar::Scalar;
pub use structure::Struct;
pub use value::Value;
