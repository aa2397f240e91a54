use packwright::core::{
    ConfigAssembler, Devtool, Minimizer, Mode, PluginDescriptor, PluginKind, RulePipeline,
};

fn assembler() -> ConfigAssembler {
    ConfigAssembler::new("/srv/site")
}

#[test]
fn test_development_configuration() {
    let config = assembler().assemble(Mode::Development);

    assert_eq!(config.mode, Mode::Development);
    assert_eq!(config.output.filename, "js/[name].js");
    assert!(!config.output.asset_module_filename.contains("[contenthash]"));
    assert!(config.optimization.minimizers.is_empty());
    assert_eq!(config.devtool, Devtool::SourceMap);
    assert_eq!(config.plugins.len(), 4);
    assert_eq!(config.rules.len(), 6);
}

#[test]
fn test_production_configuration() {
    let config = assembler().assemble(Mode::Production);

    assert_eq!(config.output.filename, "js/[name].[contenthash].js");
    assert_eq!(
        config.optimization.minimizers,
        vec![Minimizer::StyleMinifier, Minimizer::ScriptMinifier]
    );
    assert_eq!(config.devtool, Devtool::Disabled);

    let last = config.plugins.last().unwrap();
    assert_eq!(last.kind(), PluginKind::ImageOptimizer);
    match last {
        PluginDescriptor::ImageOptimizer { lossless } => {
            assert!(lossless.svg.preserve_viewbox);
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_assembly_idempotent_across_calls() {
    let assembler = assembler();
    for mode in [Mode::Development, Mode::Production] {
        let first = assembler.assemble(mode);
        let second = assembler.assemble(mode);
        assert_eq!(first, second, "assembly must be deterministic for {}", mode);
    }
}

#[test]
fn test_cleaning_precedes_emitting_plugins() {
    for mode in [Mode::Development, Mode::Production] {
        let config = assembler().assemble(mode);
        let index_of = |kind: PluginKind| {
            config
                .plugins
                .iter()
                .position(|p| p.kind() == kind)
                .unwrap()
        };
        let clean = index_of(PluginKind::CleanOutputDir);
        assert!(clean < index_of(PluginKind::CopyAssets));
        assert!(clean < index_of(PluginKind::HtmlTemplate));
    }
}

#[test]
fn test_dev_server_block_is_mode_independent() {
    let dev = assembler().assemble(Mode::Development).dev_server;
    let prod = assembler().assemble(Mode::Production).dev_server;
    assert_eq!(dev, prod);
    assert!(dev.spa_fallback);
    assert!(dev.hot);
    assert!(dev.compress);
    assert_eq!(dev.port, 8080);
}

#[test]
fn test_rule_table_matches_expected_files() {
    let config = assembler().assemble(Mode::Production);

    let matching: Vec<usize> = config
        .rules
        .iter()
        .enumerate()
        .filter(|(_, r)| r.test.is_match("src/styles/theme.scss"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(matching, vec![2], "only the sass rule matches scss files");

    let script_rule = &config.rules[3];
    assert!(script_rule.test.is_match("src/js/main.js"));
    assert!(script_rule
        .exclude
        .as_ref()
        .unwrap()
        .is_match("node_modules/react/index.js"));

    match &script_rule.pipeline {
        RulePipeline::Loaders(loaders) => assert_eq!(loaders.len(), 1),
        _ => panic!("script rule must be a loader chain"),
    }
}
