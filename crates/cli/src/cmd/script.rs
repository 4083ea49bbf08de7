pub fn run() {
    print!("{}", mkhelp_core::script());
}
