use qr_sampler::prelude::*;

fn two_model_space() -> ParameterSpace {
    ParameterSpace::new(vec![
        ParamGroup::new()
            .param("kernel", vec!["linear"])
            .param("C", FloatDistribution::log_uniform(1e-2, 1e2)),
        ParamGroup::new()
            .param("kernel", vec!["rbf"])
            .param("C", FloatDistribution::log_uniform(1e-2, 1e2))
            .param("gamma", FloatDistribution::log_uniform(1e-4, 1e-1)),
    ])
}

#[test]
fn dimension_is_widest_group() {
    let sampler = QuasiRandomSampler::new(two_model_space(), 10, Some(0)).unwrap();
    assert_eq!(sampler.dimension(), 3);
    assert_eq!(sampler.alpha().len(), 3);
}

#[test]
fn every_sample_comes_from_one_group() {
    let sampler = QuasiRandomSampler::new(two_model_space(), 200, Some(5)).unwrap();
    let mut linear = 0;
    let mut rbf = 0;

    for sample in sampler.samples().unwrap() {
        match sample["kernel"].as_str().unwrap() {
            "linear" => {
                linear += 1;
                assert_eq!(sample.len(), 2);
                assert!(!sample.contains("gamma"));
            }
            "rbf" => {
                rbf += 1;
                assert_eq!(sample.len(), 3);
                let gamma = sample["gamma"].as_f64().unwrap();
                assert!((1e-4..=1e-1).contains(&gamma), "gamma {gamma}");
            }
            other => panic!("unexpected kernel {other}"),
        }
        let c = sample["C"].as_f64().unwrap();
        assert!((1e-2..=1e2).contains(&c), "C {c}");
    }

    // Groups are picked uniformly at random.
    assert!(linear > 60 && rbf > 60, "linear {linear}, rbf {rbf}");
}

#[test]
fn multi_group_size_uses_summed_grid() {
    let space = ParameterSpace::new(vec![
        ParamGroup::new().param("a", vec![1, 2]),
        ParamGroup::new().param("b", vec![1, 2, 3]).param("c", vec![true, false]),
    ]);
    let sampler = QuasiRandomSampler::new(space.clone(), 100, Some(0)).unwrap();
    assert_eq!(sampler.len(), 2 + 6);

    let sampler = QuasiRandomSampler::new(space, 5, Some(0)).unwrap();
    assert_eq!(sampler.len(), 5);
}

#[test]
fn empty_second_group_is_reported_by_index() {
    let space = ParameterSpace::new(vec![ParamGroup::new().param("a", vec![1]), ParamGroup::new()]);
    match QuasiRandomSampler::new(space, 1, Some(0)).unwrap_err() {
        Error::EmptyGroup { group } => assert_eq!(group, 1),
        other => panic!("unexpected error: {other:?}"),
    }
}
