pub mod database;
pub mod descriptor;
pub mod instances;

pub use database::*;
pub use descriptor::{
    ComponentTypeDescriptor, EventDescriptor, MethodDescriptor, ParamDescriptor,
    PropertyDescriptor, RwMode,
};
pub use instances::*;
