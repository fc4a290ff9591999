use price_forecast::forecast::{ForecastAdapter, ForecastQuery};
use price_forecast::{
    Dashboard, DashboardConfig, DataLoader, FittedModel, ForecastError, LinearTrendModel,
    SeriesStore,
};
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

/// Model that remembers the indices it was asked for
#[derive(Debug, Default)]
struct SpyModel {
    calls: Mutex<Vec<i64>>,
}

impl FittedModel for SpyModel {
    fn predict(&self, sequential_index: i64) -> price_forecast::Result<f64> {
        self.calls.lock().unwrap().push(sequential_index);
        Ok(100.0 + 10.0 * sequential_index as f64)
    }

    fn name(&self) -> &str {
        "spy"
    }
}

// Helper function to create a small dataset, model and config on disk
fn create_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();

    fs::write(
        dir.path().join("harga.csv"),
        "Komoditas,Tahun,Bulan,Harga\n\
         X,2024,Maret,120\n\
         X,2024,Januari,100\n\
         Gula Pasir,2023,Desember,15000\n\
         X,2024,Februari,110\n\
         Gula Pasir,2024,Januari,15100\n\
         X,2024,Bulan Ke-13,999\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("model.json"),
        r#"{"name": "Tren X", "intercept": 100.0, "slope": 10.0}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("pangan.toml"),
        format!(
            "data_path = {:?}\nmodel_path = {:?}\nforecast_commodity = \"x\"\n",
            dir.path().join("harga.csv"),
            dir.path().join("model.json"),
        ),
    )
    .unwrap();

    dir
}

#[test]
fn test_end_to_end_scenario() {
    let dir = create_workspace();
    let loaded = DataLoader::from_csv(dir.path().join("harga.csv")).unwrap();
    assert_eq!(loaded.rejected.len(), 1);

    let store = SeriesStore::new(loaded.records);
    let series = store.series("X");
    assert_eq!(series.prices(), vec![100.0, 110.0, 120.0]);

    let model = SpyModel::default();
    let adapter = ForecastAdapter::new(&model);

    // April 2024 is one month after the last observation
    let forecast = adapter
        .forecast(&series, &ForecastQuery::new(4, 2024).unwrap())
        .unwrap();
    assert_eq!(forecast.months_ahead, 1);
    assert_eq!(forecast.model_index, 3);
    assert_eq!(forecast.value, 130.0);

    // March 2024 is the last observation itself
    let result = adapter.forecast(&series, &ForecastQuery::new(3, 2024).unwrap());
    assert!(matches!(
        result,
        Err(ForecastError::NonFuturePeriod { months_ahead: 0 })
    ));

    assert_eq!(*model.calls.lock().unwrap(), vec![3]);
}

#[test]
fn test_dashboard_from_config_file() {
    let dir = create_workspace();
    let config = DashboardConfig::load(dir.path().join("pangan.toml")).unwrap();
    let dashboard = Dashboard::load(config).unwrap();

    let commodities: Vec<String> = dashboard.commodities().into_iter().collect();
    assert_eq!(commodities, vec!["Gula Pasir", "X"]);
    assert_eq!(dashboard.forecast_horizon(), Some(2024..=2026));

    let forecast = dashboard.forecast("X", 1, 2025).unwrap();
    assert_eq!(forecast.months_ahead, 10);
    assert_eq!(forecast.model_index, 12);
    assert_eq!(forecast.value, 220.0);

    // forecasting is refused for other commodities but history still works
    assert!(matches!(
        dashboard.forecast("Gula Pasir", 1, 2025),
        Err(ForecastError::ForecastUnavailable(_))
    ));
    let history = dashboard
        .history("Gula Pasir", &[2024].into_iter().collect())
        .unwrap();
    assert_eq!(history.view.len(), 1);
    assert_eq!(history.summary.map(|s| s.mean), Some(15_100.0));
}

#[test]
fn test_model_artifact_drives_forecast() {
    let dir = create_workspace();
    let model = LinearTrendModel::from_json_file(dir.path().join("model.json")).unwrap();
    assert_eq!(model.name(), "Tren X");

    let loaded = DataLoader::from_csv(dir.path().join("harga.csv")).unwrap();
    let store = SeriesStore::new(loaded.records);
    let series = store.series("X");

    let forecast = ForecastAdapter::new(&model)
        .forecast(&series, &ForecastQuery::new(6, 2024).unwrap())
        .unwrap();
    assert_eq!(forecast.model_index, 5);
    assert_eq!(forecast.value, 150.0);
}

#[test]
fn test_missing_model_file_fails_load() {
    let dir = create_workspace();
    let config = DashboardConfig {
        data_path: dir.path().join("harga.csv"),
        model_path: dir.path().join("missing.json"),
        ..DashboardConfig::default()
    };

    assert!(matches!(Dashboard::load(config), Err(ForecastError::IoError(_))));
}
