fn main() {
    env_logger::init();
    mandelbrot_explorer::run_gui();
}
