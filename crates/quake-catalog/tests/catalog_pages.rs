//! Catalog page parsing tests.
//!
//! The live test needs network access to news.ceic.ac.cn:
//!   cargo test -p quake-catalog --test catalog_pages -- --ignored

use quake_catalog::{
    parse_catalog, parse_table, CatalogClient, CatalogEntry, CatalogError, DEFAULT_CATALOG_URL,
};
use quake_core::SeismicEvent;

const NEWDATA_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>中国地震台网--速报目录</title></head>
<body>
<script type="text/javascript">
    const newdata = [
        /* 最近24小时 */
        {"id":"1","CATA_ID":"CC20250403050340","O_TIME":"2025-04-03 05:03:39","EPI_LAT":"2.15","EPI_LON":"126.85","EPI_DEPTH":40,"M":"5.9","LOCATION_C":"印尼马鲁古海北部","NEW_DID":"CC20250403050340"},
        {"id":"2","CATA_ID":"CD20250402151820","O_TIME":"2025-04-02 15:18:20","EPI_LAT":"28.52","EPI_LON":"103.99","EPI_DEPTH":10,"M":"3.1","LOCATION_C":"云南昭通市绥江县","NEW_DID":"CD20250402151820"}
    ];
</script>
</body>
</html>"#;

const TABLE_PAGE: &str = r#"<html><body>
<table class="speed-table1">
  <tr><th>震级(M)</th><th>发震时刻(UTC+8)</th><th>纬度(°)</th><th>经度(°)</th><th>深度(千米)</th><th>参考位置</th></tr>
  <tr>
    <td align="center" style="padding-left: 20px">5.9</td>
    <td align="center">2025-04-03 05:03:39</td>
    <td align="center">2.15</td>
    <td align="center">126.85</td>
    <td align="center">40</td>
    <td align="left"><a href="https://news.ceic.ac.cn/CC20250403050340.html" target="_blank">印尼马鲁古海北部</a></td>
  </tr>
  <tr>
    <td>3.1</td><td>2025-04-02 15:18:20</td><td>28.52</td><td>103.99</td><td>10</td><td>云南昭通市绥江县</td>
  </tr>
  <tr><td>暂无</td><td>--</td><td></td><td></td><td></td><td></td></tr>
  <tr><td>4.0</td><td>2025-04-01 01:00:00</td><td>-5.5</td><td>150.1</td></tr>
</table>
</body></html>"#;

#[test]
fn test_newdata_page() {
    let records = parse_catalog(NEWDATA_PAGE).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].event_id.as_deref(), Some("CC20250403050340"));

    let event = SeismicEvent::from_record(&records[1]).unwrap();
    assert_eq!(event.magnitude, 3.1);
    assert_eq!(event.location_name, "云南昭通市绥江县");
    assert_eq!(event.depth_km, Some(10.0));
}

#[test]
fn test_table_fallback() {
    let records = parse_catalog(TABLE_PAGE).unwrap();
    assert_eq!(records.len(), 2);

    let first = SeismicEvent::from_record(&records[0]).unwrap();
    assert_eq!(first.magnitude, 5.9);
    assert_eq!(first.origin_time, "2025-04-03 05:03:39");
    assert_eq!(first.epicenter_lat, 2.15);
    assert_eq!(first.epicenter_lon, 126.85);
    assert_eq!(first.depth_km, Some(40.0));
    assert_eq!(first.location_name, "印尼马鲁古海北部");
}

#[test]
fn test_table_skips_short_and_invalid_rows() {
    let records = parse_table(TABLE_PAGE);
    assert!(records.iter().all(|r| r.origin_time.as_deref() != Some("2025-04-01 01:00:00")));
    assert!(records.iter().all(|r| r.origin_time.as_deref() != Some("--")));
}

#[test]
fn test_empty_newdata_falls_back_to_table() {
    let page = format!("<script>var newdata = [];</script>{}", TABLE_PAGE);
    assert_eq!(parse_catalog(&page).unwrap().len(), 2);
}

#[test]
fn test_page_without_events() {
    let err = parse_catalog("<html><body>维护中</body></html>").unwrap_err();
    assert!(matches!(err, CatalogError::NoEvents));
    assert_eq!(err.to_string(), "未能从页面中提取到地震数据");
}

#[test]
fn test_entries_from_page() {
    let entries: Vec<CatalogEntry> = parse_catalog(NEWDATA_PAGE)
        .unwrap()
        .iter()
        .map(|r| CatalogEntry::from_record(r, DEFAULT_CATALOG_URL))
        .collect();
    assert_eq!(entries[1].title, "云南昭通市绥江县发生3.1级地震");
    assert_eq!(entries[1].url, DEFAULT_CATALOG_URL);
}

#[tokio::test]
#[ignore]
async fn test_live_catalog() {
    let client = CatalogClient::new(DEFAULT_CATALOG_URL).unwrap();
    let entries = client.latest_entries().await.unwrap();
    assert!(!entries.is_empty());
}
