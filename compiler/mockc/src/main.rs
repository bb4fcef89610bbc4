//! mockgen CLI

fn main() {
    mockc::init_tracing();
    let command = mockc::parse_args(std::env::args().skip(1));
    std::process::exit(mockc::execute(command));
}
