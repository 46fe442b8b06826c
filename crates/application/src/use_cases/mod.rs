pub mod hostnames;

pub use hostnames::{
    DetectHostNamesUseCase, GetHostNamesUseCase, HostNameReport, NameStrategy, NAME_STRATEGIES,
};
