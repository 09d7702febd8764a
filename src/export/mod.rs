pub mod descriptor;
pub mod png;

pub use descriptor::{
    DescriptorOptions, render_descriptor, tileset_descriptor, tileset_descriptor_with,
    write_descriptor,
};
pub use png::{encode_png, save_png};
