// Domain layer: the pet record, form inputs and the ports the console talks through.

pub mod model;
pub mod ports;
