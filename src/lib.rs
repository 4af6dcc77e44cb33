use serde::{Serialize, Deserialize};

pub mod gaussian;
pub mod log_kernel;
pub mod search;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct RuntimeConf {
    pub output_path: String
}

pub fn load_runtime_conf() -> RuntimeConf {
    match std::fs::read_to_string("runtime_conf.yaml") {
        Ok(contents) => serde_yaml::from_str(&contents).expect("runtime_conf.yaml is not valid yaml"),
        Err(_) => RuntimeConf { output_path: String::from("output") }
    }
}
