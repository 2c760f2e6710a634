use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs the long `--version` output
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
