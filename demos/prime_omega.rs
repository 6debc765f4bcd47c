use prime_trial::{prime_factors, prime_factors_with_multiplicity};

/// Calculate the (small) prime omega function ω(n) on the target
/// Reference: <https://en.wikipedia.org/wiki/Prime_omega_function>
fn prime_omega(target: u64) -> usize {
    prime_factors(target).count()
}

/// Calculate the (big) prime omega function Ω(n) on the target
/// Reference: <https://en.wikipedia.org/wiki/Prime_omega_function>
#[allow(non_snake_case)]
fn prime_Omega(target: u64) -> usize {
    prime_factors_with_multiplicity(target).map(|(_, e)| e).sum()
}

fn main() {
    println!("Prime omega of numbers from 10 to 99:");
    for i in 10..100 {
        println!("{}: ω={}, Ω={}", i, prime_omega(i), prime_Omega(i));
    }
}
