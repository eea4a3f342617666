use hello_world::HelloResult;

fn main() -> HelloResult<()> {
    env_logger::init();

    // Skip the program name; everything else is ignored anyway,
    // and may not be valid UTF-8.
    hello_world::run(std::env::args_os().skip(1))
}
