pub fn answer() -> u32 {
    dprint::dprint!(42)
}
