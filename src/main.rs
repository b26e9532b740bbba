fn main() {
    themeloc::run_cli();
}
