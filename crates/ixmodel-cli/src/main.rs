use ixmodel_cli::IxmodelCli;

fn main() -> anyhow::Result<()> {
    IxmodelCli::parse_and_run()
}
