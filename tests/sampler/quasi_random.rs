use qr_sampler::prelude::*;

fn svm_group() -> ParamGroup {
    ParamGroup::new()
        .param("kernel", vec!["rbf", "linear"])
        .param("C", FloatDistribution::uniform(0.0, 1.0))
}

#[test]
fn svm_space_yields_valid_samples() {
    let sampler = QuasiRandomSampler::new(svm_group(), 10, Some(0)).unwrap();
    let samples = sampler.samples().unwrap();

    assert_eq!(samples.len(), 10);
    for sample in &samples {
        assert_eq!(sample.len(), 2);
        let kernel = sample["kernel"].as_str().unwrap();
        assert!(kernel == "rbf" || kernel == "linear", "kernel {kernel}");
        let c = sample["C"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&c), "C {c} out of range [0, 1]");
    }
}

#[test]
fn both_kernels_are_visited() {
    let sampler = QuasiRandomSampler::new(svm_group(), 10, Some(0)).unwrap();
    let kernels: Vec<String> = sampler
        .samples()
        .unwrap()
        .iter()
        .map(|s| s["kernel"].as_str().unwrap().to_owned())
        .collect();
    assert!(kernels.iter().any(|k| k == "rbf"));
    assert!(kernels.iter().any(|k| k == "linear"));
}

#[test]
fn better_coverage_than_random() {
    // 20 quasi-random draws of one parameter should fill nearly all of
    // 10 equal-width bins.
    let space = ParamGroup::new().param("x", FloatDistribution::uniform(0.0, 1.0));
    let sampler = QuasiRandomSampler::new(space, 20, Some(123)).unwrap();

    let n_bins = 10;
    let mut bins = vec![0u32; n_bins];
    for sample in &sampler {
        let v = sample.unwrap()["x"].as_f64().unwrap();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bin = ((v * n_bins as f64).floor() as usize).min(n_bins - 1);
        bins[bin] += 1;
    }

    let filled_bins = bins.iter().filter(|&&c| c > 0).count();
    assert_eq!(filled_bins, n_bins, "bins {bins:?}");
    assert!(bins.iter().all(|&c| c <= 3), "bins {bins:?}");
}

#[test]
fn enumerated_values_are_all_reached() {
    let values: Vec<i64> = (0..=10).collect();
    let space = ParamGroup::new().param("C", values.clone());
    let sampler = QuasiRandomSampler::new(space, 50, Some(9)).unwrap();

    let mut seen = [false; 11];
    for sample in sampler.samples().unwrap() {
        let c = sample["C"].as_i64().unwrap();
        assert!(values.contains(&c));
        seen[usize::try_from(c).unwrap()] = true;
    }
    assert!(seen.iter().all(|&s| s), "seen {seen:?}");
}

#[test]
fn int_and_exponential_distributions() {
    let space = ParamGroup::new()
        .param("layers", IntDistribution::uniform(1, 8))
        .param("units", IntDistribution::uniform(32, 512).step(32))
        .param("batch", IntDistribution::log_uniform(8, 1024))
        .param("decay", Exponential::new(10.0));
    let sampler = QuasiRandomSampler::new(space, 100, Some(4)).unwrap();
    assert_eq!(sampler.dimension(), 4);

    for sample in sampler.samples().unwrap() {
        let layers = sample["layers"].as_i64().unwrap();
        assert!((1..=8).contains(&layers));
        let units = sample["units"].as_i64().unwrap();
        assert!((32..=512).contains(&units) && units % 32 == 0, "units {units}");
        let batch = sample["batch"].as_i64().unwrap();
        assert!((8..=1024).contains(&batch));
        assert!(sample["decay"].as_f64().unwrap() >= 0.0);
    }
}

#[test]
fn size_is_min_of_n_iter_and_grid() {
    let space = ParamGroup::new()
        .param("a", vec![1, 2, 3])
        .param("b", vec!["x", "y"]);
    for (n_iter, expected) in [(0, 0), (3, 3), (6, 6), (7, 6), (100, 6)] {
        let sampler = QuasiRandomSampler::new(space.clone(), n_iter, Some(1)).unwrap();
        assert_eq!(sampler.len(), expected, "n_iter {n_iter}");
        assert_eq!(sampler.iter().count(), n_iter);
    }
}

#[test]
fn size_with_continuous_domain_is_n_iter() {
    let space = ParamGroup::new()
        .param("a", vec![1])
        .param("b", FloatDistribution::uniform(0.0, 1.0));
    let sampler = QuasiRandomSampler::new(space, 100, Some(1)).unwrap();
    assert_eq!(sampler.len(), 100);
}

#[test]
fn malformed_spaces_fail_fast() {
    let cases: Vec<ParameterSpace> = vec![
        ParameterSpace::new(vec![]),
        ParameterSpace::from(ParamGroup::new()),
        ParameterSpace::from(ParamGroup::new().param("k", Vec::<i64>::new())),
        ParameterSpace::from(
            ParamGroup::new().param("lr", FloatDistribution::log_uniform(-1.0, 1.0)),
        ),
        ParameterSpace::from(ParamGroup::new().param("a", vec![1]).param("a", vec![2])),
    ];
    for space in cases {
        let err = QuasiRandomSampler::builder(space).build().unwrap_err();
        assert!(err.is_invalid_parameter_space(), "{err}");
    }
}

#[test]
fn user_distribution_with_inverse_cdf() {
    #[derive(Debug)]
    struct Triangular;

    impl InverseCdf for Triangular {
        fn ppf(&self, q: f64) -> Result<ParamValue> {
            Ok(ParamValue::Float(q.sqrt()))
        }
    }

    let space = ParamGroup::new().param("t", Domain::distribution(Triangular));
    let sampler = QuasiRandomSampler::new(space, 30, Some(2)).unwrap();
    for sample in sampler.samples().unwrap() {
        let t = sample["t"].as_f64().unwrap();
        assert!((0.0..1.0).contains(&t));
    }
}

#[test]
fn user_distribution_errors_propagate_verbatim() {
    #[derive(Debug)]
    struct AlwaysFails;

    impl DirectSample for AlwaysFails {
        fn sample(&self, _rng: &mut fastrand::Rng) -> Result<ParamValue> {
            Err(Error::Sampling {
                name: "always_fails".to_string(),
                reason: "no samples today".to_string(),
            })
        }
    }

    let space = ParamGroup::new().param("x", Domain::sampled(AlwaysFails));
    let sampler = QuasiRandomSampler::new(space, 5, Some(0)).unwrap();

    let mut iter = sampler.iter();
    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(err.to_string(), "sampling 'always_fails' failed: no samples today");
    assert!(iter.next().is_none());
    assert!(sampler.samples().is_err());
}

#[test]
fn full_range_bounds_sample_without_overflow() {
    let space = ParamGroup::new()
        .param("n", IntDistribution::uniform(i64::MIN, i64::MAX))
        .param("x", FloatDistribution::uniform(0.0, 1.0).step(1e-300))
        .param("wide", FloatDistribution::uniform(-1e308, 1e308));
    let sampler = QuasiRandomSampler::new(space, 20, Some(0)).unwrap();
    let samples = sampler.samples().unwrap();

    assert_eq!(samples.len(), 20);
    assert!(samples.iter().any(|s| s["n"].as_i64() != Some(i64::MIN)));
    for sample in &samples {
        let x = sample["x"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&x), "x {x}");
        let wide = sample["wide"].as_f64().unwrap();
        assert!(wide.is_finite(), "wide {wide}");
    }
}
