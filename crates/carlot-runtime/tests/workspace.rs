use carlot_runtime::{Error, Workspace};
use carlot_testing::TestWorld;

#[test]
fn test_empty_data_dir_falls_back_to_demo_data() -> anyhow::Result<()> {
    let world = TestWorld::new()?;

    let workspace = Workspace::open_at(world.data_dir().to_path_buf())?;
    let collection = workspace.open_collection()?;

    assert!(!collection.is_empty());
    assert!(!collection.brands().is_empty());
    Ok(())
}

#[test]
fn test_configured_reference_data_is_loaded() -> anyhow::Result<()> {
    let world = TestWorld::new()?.with_inventory()?;

    let workspace = Workspace::open_at(world.data_dir().to_path_buf())?;
    let mut collection = workspace.open_collection()?;

    assert_eq!(collection.len(), 5);
    assert_eq!(collection.get_by_brand_id("b1").len(), 2);

    // Sequential ids continue after the largest numeric id; the fixture has none.
    let id = collection.add(carlot_testing::fixtures::car_props("b1", "m1", 1, 2000))?;
    assert_eq!(id.as_str(), "1");
    Ok(())
}

#[test]
fn test_missing_reference_file_is_store_error() -> anyhow::Result<()> {
    let world = TestWorld::new()?;
    world.write_config("reference_data = \"does-not-exist.json\"\n")?;

    let workspace = Workspace::open_at(world.data_dir().to_path_buf())?;
    let err = workspace.open_collection().unwrap_err();

    assert!(matches!(err, Error::Store(carlot_store::Error::Io(_))));
    Ok(())
}

#[test]
fn test_malformed_config_is_config_error() -> anyhow::Result<()> {
    let world = TestWorld::new()?;
    world.write_config("id_scheme = [1, 2]\n")?;

    let err = Workspace::open_at(world.data_dir().to_path_buf()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    Ok(())
}
