// Domain layer: the value being greeted.

pub mod model;
