fn main() {
    let code = biomass_bootstrap::run_cli();
    if code != 0 {
        std::process::exit(code);
    }
}
