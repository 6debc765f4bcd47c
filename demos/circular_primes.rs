use prime_trial::circular_primes;

fn main() {
    let found: Vec<u64> = circular_primes(100_000).collect();
    println!("Circular primes under 100000: {:?}", found);
    println!("({} in total)", found.len());
}
