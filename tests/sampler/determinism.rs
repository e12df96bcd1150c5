use qr_sampler::prelude::*;

#[test]
fn repeated_passes_are_identical() {
    let space = ParamGroup::new()
        .param("kernel", vec!["rbf", "linear"])
        .param("C", FloatDistribution::uniform(0.0, 1.0));
    let sampler = QuasiRandomSampler::new(space, 10, Some(0)).unwrap();

    let first = sampler.samples().unwrap();
    let second = sampler.samples().unwrap();
    assert_eq!(first, second);
}

#[test]
fn enumerated_only_passes_are_identical() {
    let space = ParamGroup::new().param("C", vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let sampler = QuasiRandomSampler::new(space, 3, Some(0)).unwrap();

    let first = sampler.samples().unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first, sampler.samples().unwrap());
}

#[test]
fn continuous_only_passes_are_identical() {
    let space = ParamGroup::new().param("C", FloatDistribution::uniform(0.0, 1.0));
    let sampler = QuasiRandomSampler::new(space, 10, Some(0)).unwrap();
    assert_eq!(sampler.samples().unwrap(), sampler.samples().unwrap());
}

#[test]
fn interleaved_passes_do_not_interfere() {
    let space = ParamGroup::new()
        .param("a", FloatDistribution::uniform(0.0, 1.0))
        .param("b", Domain::sampled(FloatDistribution::uniform(0.0, 1.0)));
    let sampler = QuasiRandomSampler::new(space, 20, Some(17)).unwrap();

    let mut left = sampler.iter();
    let mut right = sampler.iter();
    let mut from_left = Vec::new();
    let mut from_right = Vec::new();
    for _ in 0..20 {
        from_left.push(left.next().unwrap().unwrap());
        from_right.push(right.next().unwrap().unwrap());
    }
    assert_eq!(from_left, from_right);
    assert_eq!(from_left, sampler.samples().unwrap());
}

#[test]
fn same_seed_same_samples_across_samplers() {
    let build = |seed| {
        let space = ParamGroup::new()
            .param("x", FloatDistribution::uniform(-5.0, 5.0))
            .param("n", IntDistribution::uniform(0, 100));
        QuasiRandomSampler::new(space, 15, Some(seed)).unwrap()
    };
    assert_eq!(build(42).samples().unwrap(), build(42).samples().unwrap());
    assert_ne!(build(42).samples().unwrap(), build(43).samples().unwrap());
}

#[test]
fn group_insertion_order_does_not_matter() {
    let forward = ParamGroup::new()
        .param("alpha", FloatDistribution::uniform(0.0, 1.0))
        .param("beta", vec![1, 2, 3])
        .param("gamma", FloatDistribution::log_uniform(1e-3, 1.0));
    let backward = ParamGroup::new()
        .param("gamma", FloatDistribution::log_uniform(1e-3, 1.0))
        .param("beta", vec![1, 2, 3])
        .param("alpha", FloatDistribution::uniform(0.0, 1.0));

    let a = QuasiRandomSampler::new(forward, 25, Some(8)).unwrap();
    let b = QuasiRandomSampler::new(backward, 25, Some(8)).unwrap();
    assert_eq!(a.samples().unwrap(), b.samples().unwrap());
}
