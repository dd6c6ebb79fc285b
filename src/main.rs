// Rendering and input handling follow the pixels game of life example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

mod auxiliary;
mod projects;
mod traits_and_structs;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("\nWelcome to Pusher Life!");
    println!("\nControls:\nW/A/S/D: move the pusher and shove the cells ahead of it\nESC: close the window");
    projects::pusher::run_pusher()
}
