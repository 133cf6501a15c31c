fn main() {
    kagami::start();
}
