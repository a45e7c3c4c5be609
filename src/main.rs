fn main() {
    nexorand_web::run();
}
