mod error;
mod integrand;
mod opt;
mod routes;
mod run_config;

use clap::Parser;
use opt::Opt;

fn route_cmd(opt: Opt) -> i32 {
    match opt {
        Opt::Demo => routes::demo(),
        Opt::Integrate(cmd) => routes::integrate(cmd),
        Opt::Run(cmd) => routes::run(cmd),
    }
}

fn main() {
    env_logger::init();

    let opt = Opt::parse();

    let exit_code = route_cmd(opt);

    std::process::exit(exit_code);
}
