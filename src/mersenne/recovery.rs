use super::mt19937::*;
use super::Error;

/// Clone an MT19937 PRNG
///
/// Output the next N random numbers of an MT19937 PRNG
/// Recover the twisted state based on the outputs
///
/// The PRNG must be at the beginning of a cycle, otherwise it is left untouched
pub fn clone(rng: &mut Mt19937) -> Result<Mt19937, Error> {
    if rng.index % N != 0 {
        return Err(Error::InvalidIndex);
    }

    let mut state = [0_u32; N];

    // the outputs are the tempered words of a single twisted state
    for word in state.iter_mut() {
        *word = untemper(rng.extract_number());
    }

    // same position as the source after consuming a full cycle
    Mt19937::from_parts(state, N)
}

/// Recover the seed of a fresh MT19937 PRNG from its first output
///
/// Only the first twisted word is computed for each candidate,
/// which needs seed words 0, 1 and M.
pub fn recover_seed<I>(first_output: u32, candidates: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let untempered = untemper(first_output);

    let mut state = [0_u32; N];
    candidates.into_iter().find(|&seed| {
        state[0] = seed;
        for j in 1..=M {
            Mt19937::k_distribute(&mut state, j);
        }

        Mt19937::twist_word(&state, 0) == untempered
    })
}

/// Recover the MT19937 state word used to generate the given random number
pub fn untemper(rand_num: u32) -> u32 {
    // invert the tempering steps in reverse order
    let mut inv_z = untemper_l(rand_num);
    inv_z = untemper_t(inv_z);
    inv_z = untemper_s(inv_z);
    untemper_u(inv_z)
}

// Invert the TEMPER_L transformation
fn untemper_l(rand_num: u32) -> u32 {
    // L >= 16, so the shifted bits never overlap the recovered ones
    rand_num ^ (rand_num >> L)
}

// Invert the TEMPER_T transformation
fn untemper_t(rand_num: u32) -> u32 {
    // the low 17 bits of C are zero
    rand_num ^ ((rand_num << T) & C)
}

// Invert the TEMPER_S transformation
fn untemper_s(rand_num: u32) -> u32 {
    // each round recovers the next S bits, starting from the low ones
    let mut res = rand_num;
    let mut known = S;

    while known < W {
        res = rand_num ^ ((res << S) & B);
        known += S;
    }

    res
}

// Invert the TEMPER_U transformation
fn untemper_u(rand_num: u32) -> u32 {
    // each round recovers the next U bits, starting from the high ones
    let mut res = rand_num;
    let mut known = U;

    while known < W {
        res = rand_num ^ ((res >> U) & D);
        known += U;
    }

    res
}
