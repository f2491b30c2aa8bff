use darknet_cfg::{
    Activation, Convolution, Cost, ExportConfig, LayerRef, LineEnding, MaxPool, NetworkDescriptor,
    Optimizer, Route, Softmax,
};

fn lf() -> ExportConfig {
    ExportConfig::new(LineEnding::Lf)
}

#[test]
fn minimal_network_renders_exactly() {
    let mut net = NetworkDescriptor::new(416, 416, 3);
    net.push(Convolution::new(16, 3, 1, 1, Activation::LeakyRelu, true));

    let expected = "[net]\n\
        # Network Dimensions\n\
        width=416\n\
        height=416\n\
        channels=3\n\
        \n\
        [convolutional]\n\
        batch_normalize=1\n\
        size=3\n\
        stride=1\n\
        pad=1\n\
        filters=16\n\
        activation=leaky\n\
        \n";
    assert_eq!(net.to_cfg_string(&lf()).unwrap(), expected);
}

#[test]
fn exporting_twice_is_byte_identical() {
    let net = NetworkDescriptor::default().with_layers(darknet_cfg::build_reference_detector(
        20,
        &darknet_cfg::DEFAULT_ANCHORS,
        9,
    ));

    let mut first = Vec::new();
    let mut second = Vec::new();
    net.export(&mut first, &lf()).unwrap();
    net.export(&mut second, &lf()).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn classifier_style_network() {
    let mut net = NetworkDescriptor::new(224, 224, 3);
    net.push(Convolution::leaky(64, 7, 2));
    net.push(MaxPool::new(2, 2, 0));
    net.push(Softmax::new(1));
    net.push(Cost::new("sse"));

    let text = net.to_cfg_string(&lf()).unwrap();
    let tags: Vec<&str> = text.lines().filter(|l| l.starts_with('[')).collect();
    assert_eq!(tags, ["[net]", "[convolutional]", "[maxpool]", "[softmax]", "[cost]"]);
    assert!(text.ends_with("\n[cost]\ntype=sse\n\n"));
}

#[test]
fn optimizer_block_follows_header() {
    let opt = Optimizer {
        batch: 1,
        subdivisions: 1,
        learning_rate: 0.05,
        schedule: [(5000, 0.001), (2000, 0.001)].into_iter().collect(),
        ..Optimizer::default()
    };
    let net = NetworkDescriptor::new(608, 608, 3).with_optimizer(opt);
    let text = net.to_cfg_string(&lf()).unwrap();
    assert!(text.starts_with(
        "[net]\n# Network Dimensions\nwidth=608\nheight=608\nchannels=3\n\n# Optimization Parameters\nbatch=1\n"
    ));
    assert!(text.contains("learning_rate=0.05\n"));
    assert!(text.contains("steps=5000,2000\nscales=0.001,0.001\n"));
}

#[test]
fn out_of_range_references_still_render() {
    let mut net = NetworkDescriptor::new(8, 8, 1);
    net.push(Route::new(vec![LayerRef::Back(40), LayerRef::Absolute(999)]));
    let text = net.to_cfg_string(&lf()).unwrap();
    assert!(text.ends_with("\n[route]\nlayers=-40, 999\n\n"));
}

#[test]
fn json_round_trip_through_a_file() {
    let net = NetworkDescriptor::default().with_layers(darknet_cfg::build_reference_detector(
        3,
        &darknet_cfg::DEFAULT_ANCHORS,
        9,
    ));
    let path = std::env::temp_dir().join(format!("darknet-cfg-roundtrip-{}.json", std::process::id()));

    net.save_json(&path).unwrap();
    let loaded = NetworkDescriptor::load_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, net);
    assert_eq!(loaded.to_cfg_string(&lf()).unwrap(), net.to_cfg_string(&lf()).unwrap());
}

#[test]
fn generate_config_writes_file() {
    let mut net = NetworkDescriptor::new(416, 416, 3);
    net.push(Convolution::leaky(16, 3, 1));
    let path = std::env::temp_dir().join(format!("darknet-cfg-generate-{}.cfg", std::process::id()));

    net.generate_config(&path, &lf()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written, net.to_cfg_string(&lf()).unwrap());
}

#[test]
fn missing_json_file_is_an_io_error() {
    let path = std::env::temp_dir().join("darknet-cfg-does-not-exist.json");
    let err = NetworkDescriptor::load_json(&path).unwrap_err();
    assert!(matches!(err, darknet_cfg::CfgError::Io(_)));
}
