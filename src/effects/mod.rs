pub mod adjust;
pub mod blur;
pub mod composite;
pub mod crop;
pub mod mask;
