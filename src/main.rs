fn main() {
    crosswork::main();
}
