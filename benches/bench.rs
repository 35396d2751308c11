use criterion::{criterion_group, criterion_main, Criterion};
use rand_xoshiro::rand_core::SeedableRng;
use pade::{
    _test_util::{rand_complex, rand_samples},
    rec::thiele::ThieleRec,
    traits::Eval,
    Complex64, Pade,
};

fn rec_all(
    rec: ThieleRec,
    samples: &[(Vec<Complex64>, Vec<Complex64>)],
) -> Vec<Pade> {
    let mut res = Vec::with_capacity(samples.len());
    for (nodes, values) in samples {
        res.push(Pade::with_rec(rec, nodes, values).unwrap());
    }
    res
}

fn eval_all(pade: &Pade, pts: &[Complex64]) -> Complex64 {
    pts.iter().map(|pt| pade.eval(pt)).sum()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);

    const NSAMPLES: usize = 8;
    const NPTS: usize = 1000;

    for n in [16, 64] {
        let samples: Vec<_> = (0..NSAMPLES)
            .map(|_| rand_samples(n, &mut rng))
            .collect();

        for prec in [128, 256, 1024] {
            let rec = ThieleRec::with_prec(prec).unwrap();
            c.bench_function(
                &format!("coeffs {n} points {prec} bits"),
                |b| b.iter(|| rec_all(rec, &samples))
            );
        }

        let (nodes, values) = &samples[0];
        let pade = Pade::new(nodes, values).unwrap();
        let pts: Vec<_> = (0..NPTS).map(|_| rand_complex(&mut rng)).collect();
        c.bench_function(
            &format!("eval {n} points"),
            |b| b.iter(|| eval_all(&pade, &pts))
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
