//! Facility dataset response DTOs.
//!
//! The Seoul open-data envelope nests everything under a service-named
//! key, and omits `row` entirely when a page range holds no data, so the
//! inner layers are all `Option`.

use serde::Deserialize;

use crate::domain::FacilityRow;

/// Top-level envelope keyed by the dataset service name.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityInfoResponse {
    #[serde(rename = "SeoulMetroFaciInfo")]
    pub seoul_metro_faci_info: Option<FacilityInfoBody>,
}

/// Inner body carrying the result code and rows.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityInfoBody {
    /// Total row count across the whole dataset.
    pub list_total_count: Option<i64>,

    /// Upstream result code and message.
    #[serde(rename = "RESULT")]
    pub result: Option<ResultMessage>,

    /// Facility rows for the requested index range. Omitted when the
    /// range is empty.
    pub row: Option<Vec<FacilityRowDto>>,
}

/// Upstream result code wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultMessage {
    #[serde(rename = "CODE")]
    pub code: String,
    #[serde(rename = "MESSAGE")]
    pub message: String,
}

/// One facility row as sent by the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityRowDto {
    /// Station code.
    #[serde(rename = "STN_CD")]
    pub station_code: Option<String>,

    /// Station name, possibly with a parenthetical line annotation.
    #[serde(rename = "STN_NM")]
    pub station_name: String,

    /// Facility name, e.g. `"엘리베이터 2호기"`.
    #[serde(rename = "ELVTR_NM")]
    pub facility_name: String,

    /// Section the facility operates over (platform to concourse, ...).
    #[serde(rename = "OPR_SEC")]
    pub operation_section: Option<String>,

    /// Install location, usually an exit reference.
    #[serde(rename = "INSTL_PSTN")]
    pub install_location: String,

    /// Usability flag / operational status.
    #[serde(rename = "USE_YN")]
    pub status: String,

    /// Facility class code (EV, ES, WL).
    #[serde(rename = "ELVTR_SE")]
    pub facility_class: Option<String>,
}

impl FacilityRowDto {
    /// Convert into the domain row, dropping dataset-only fields.
    pub fn into_row(self) -> FacilityRow {
        FacilityRow {
            station_name: self.station_name,
            facility_name: self.facility_name,
            install_location: self.install_location,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_envelope() {
        let json = r#"{
            "SeoulMetroFaciInfo": {
                "list_total_count": 2,
                "RESULT": { "CODE": "INFO-000", "MESSAGE": "정상 처리되었습니다" },
                "row": [
                    {
                        "STN_CD": "2725",
                        "STN_NM": "신설동(1호선)",
                        "ELVTR_NM": "엘리베이터 1호기",
                        "OPR_SEC": "대합실~승강장",
                        "INSTL_PSTN": "2번 출구",
                        "USE_YN": "사용가능",
                        "ELVTR_SE": "EV"
                    }
                ]
            }
        }"#;

        let envelope: FacilityInfoResponse = serde_json::from_str(json).unwrap();
        let body = envelope.seoul_metro_faci_info.unwrap();
        assert_eq!(body.list_total_count, Some(2));
        assert_eq!(body.result.unwrap().code, "INFO-000");

        let rows = body.row.unwrap();
        assert_eq!(rows.len(), 1);

        let row = rows.into_iter().next().unwrap().into_row();
        assert_eq!(row.station_name, "신설동(1호선)");
        assert_eq!(row.facility_name, "엘리베이터 1호기");
        assert_eq!(row.install_location, "2번 출구");
        assert_eq!(row.status, "사용가능");
    }

    #[test]
    fn empty_range_omits_rows() {
        let json = r#"{
            "SeoulMetroFaciInfo": {
                "list_total_count": 0,
                "RESULT": { "CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다." }
            }
        }"#;

        let envelope: FacilityInfoResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.seoul_metro_faci_info.unwrap().row.is_none());
    }

    #[test]
    fn error_envelope_without_service_key() {
        let json = r#"{ "RESULT": { "CODE": "ERROR-500", "MESSAGE": "서버 오류" } }"#;
        let envelope: FacilityInfoResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.seoul_metro_faci_info.is_none());
    }
}
