use crate::{assert_float_eq, eval::evaluate, tree::Expr};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Helper for sampling multiple variables at once.
pub(crate) struct Sampler {
    samples_per_var: usize,
    var_samples: Vec<f64>,
    sample: Vec<f64>,
    counter: Vec<usize>,
    done: bool,
}

impl Sampler {
    /**
    Create a sampler for all the variables. `vardata` should contain a
    tuple of (variable name, lower bound, upper bound). The variables
    are sampled between the bounds, `samples_per_var` times.
    */
    pub fn new(vardata: &[(&str, f64, f64)], samples_per_var: usize, seed: u64) -> Sampler {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut var_samples = Vec::with_capacity(vardata.len() * samples_per_var);
        for &(_name, lower, upper) in vardata {
            let span = upper - lower;
            for _ in 0..samples_per_var {
                var_samples.push(lower + rng.random::<f64>() * span);
            }
        }
        Sampler {
            samples_per_var,
            var_samples,
            sample: vec![f64::NAN; vardata.len()],
            counter: vec![0; vardata.len()],
            done: false,
        }
    }

    pub fn next(&mut self) -> Option<&[f64]> {
        if self.done {
            return None;
        }
        for (i, c) in self.counter.iter().enumerate() {
            self.sample[i] = self.var_samples[i * self.samples_per_var + *c];
        }
        for c in self.counter.iter_mut() {
            *c += 1;
            if *c < self.samples_per_var {
                break;
            } else {
                *c = 0;
            }
        }
        if self.counter.iter().all(|c| *c == 0) {
            self.done = true;
        }
        Some(&self.sample)
    }
}

fn bindings<'a>(vardata: &[(&'a str, f64, f64)], sample: &[f64]) -> Vec<(&'a str, f64)> {
    vardata
        .iter()
        .zip(sample.iter())
        .map(|(&(name, ..), &value)| (name, value))
        .collect()
}

/**
Helper function to evaluate the expression with randomly sampled variable
values and compare the result to the one returned by the `expectedfn` for
the same inputs. The values must be within `eps` of each other.

Each variable is sampled within the range indicated by the corresponding entry
in `vardata`. Each entry in vardata consists of the name of the variable,
lower bound and upper bound. `expectedfn` receives the sampled values in the
same order.
*/
pub fn check_value_eval<F>(
    expr: Expr,
    mut expectedfn: F,
    vardata: &[(&str, f64, f64)],
    samples_per_var: usize,
    eps: f64,
) where
    F: FnMut(&[f64]) -> f64,
{
    let mut sampler = Sampler::new(vardata, samples_per_var, 42);
    while let Some(sample) = sampler.next() {
        let vars = bindings(vardata, sample);
        let actual = evaluate(&expr, vars.as_slice()).unwrap();
        let expected = expectedfn(sample);
        assert_float_eq!(expected, actual, eps, sample);
    }
}

/// Compare `expr1` and `expr2` by evaluating them at randomly sampled
/// values. The `vardata` slice is expected to contain tuples in the format
/// (name, min, max), where the name is that of a variable in the
/// expressions, and [min, max] represents the range from which the values
/// for that variable can be randomly sampled. Each variable will be sampled
/// `samples_per_var` times, and the expressions will be compared at all
/// combinations of samples. That means, if the expressions contain 2
/// variables and `samples_per_var` is 20, then they will be evaluated and
/// compared with 20 ^ 2 = 400 different samples. This test asserts that the
/// values of the two expressions do not differ by more than `eps` at any of
/// the samples.
pub fn compare_exprs(
    expr1: &Expr,
    expr2: &Expr,
    vardata: &[(&str, f64, f64)],
    samples_per_var: usize,
    eps: f64,
) {
    let mut sampler = Sampler::new(vardata, samples_per_var, 42);
    while let Some(sample) = sampler.next() {
        let vars = bindings(vardata, sample);
        let a = evaluate(expr1, vars.as_slice()).unwrap();
        let b = evaluate(expr2, vars.as_slice()).unwrap();
        assert_float_eq!(a, b, eps, (expr1.to_string(), expr2.to_string(), &vars));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_sampler_covers_all_combinations() {
        let mut sampler = Sampler::new(&[("x", 0., 1.), ("y", 2., 3.)], 4, 7);
        let mut count = 0;
        while let Some(sample) = sampler.next() {
            assert_eq!(sample.len(), 2);
            assert!((0. ..=1.).contains(&sample[0]));
            assert!((2. ..=3.).contains(&sample[1]));
            count += 1;
        }
        assert_eq!(count, 16);
    }
}
