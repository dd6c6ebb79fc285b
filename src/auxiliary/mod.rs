pub mod randomizer;
pub mod settings;
pub mod window;
