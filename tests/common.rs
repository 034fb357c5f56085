use twister::Mt19937;

// first outputs of the reference mt19937ar seeded with 5489
#[allow(dead_code)]
pub const SEED_5489_OUTPUTS: [u32; 16] = [
    3499211612, 581869302, 3890346734, 3586334585, 545404204, 4161255391, 3922919429,
    949333985, 2715962298, 1323567403, 418932835, 2350294565, 1196140740, 809094426,
    2348838239, 4264392720,
];

// extract the next `count` outputs from a generator
#[allow(dead_code)]
pub fn take(rng: &mut Mt19937, count: usize) -> Vec<u32> {
    (0..count).map(|_| rng.extract_number()).collect()
}
