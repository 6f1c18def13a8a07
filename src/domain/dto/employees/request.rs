//! 직원 생성/수정 요청 DTO
//!
//! 클라이언트 입력 데이터의 검증과 정규화를 담당합니다.
//!
//! ## 검증 비대칭 (의도된 설계)
//!
//! - **생성**: 인식하지 못하는 필드는 무시하고, `skills`에 평평한 문자열이
//!   들어와도 목록으로 관대하게 강제 변환합니다.
//! - **부분 수정**: 인식하지 못하는 필드가 하나라도 있으면 전체를 거부합니다
//!   (`deny_unknown_fields`). 강제 변환 규칙은 동일하게 적용됩니다.
//!
//! 두 동작은 서로 다른 클라이언트 실수를 다르게 다루기 위한 것이므로
//! 통합하지 않고 각각 유지합니다.

use chrono::NaiveDate;
use mongodb::bson::Document;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::utils::date_utils;

/// `skills` 입력의 두 가지 허용 형태
///
/// 구조화된 목록 대신 평평한 문자열을 보내는 클라이언트를 허용하기 위한
/// 역직렬화 중간 표현입니다.
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsInput {
    /// 이미 목록인 경우 - 그대로 사용
    Sequence(Vec<String>),
    /// 평평한 문자열인 경우 - 강제 변환 규칙 적용
    Flat(String),
}

impl SkillsInput {
    /// 강제 변환 규칙을 적용하여 정규화된 목록을 반환합니다.
    ///
    /// - 콤마를 포함한 문자열: 콤마로 분리하고 각 조각의 공백을 제거하며,
    ///   빈 조각은 버립니다.
    /// - 콤마가 없는 문자열: 해당 문자열 하나를 담은 목록이 됩니다.
    /// - 이미 목록인 입력: 그대로 사용합니다.
    fn coerce(self) -> Vec<String> {
        match self {
            SkillsInput::Sequence(skills) => skills,
            SkillsInput::Flat(value) => {
                if value.contains(',') {
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|part| !part.is_empty())
                        .map(String::from)
                        .collect()
                } else {
                    vec![value]
                }
            }
        }
    }
}

/// 생성 요청의 `skills` 필드 역직렬화 (필드 생략 시 빈 목록)
fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(SkillsInput::deserialize(deserializer)?.coerce())
}

/// 부분 수정 요청의 `skills` 필드 역직렬화 (null은 미제공으로 처리)
fn deserialize_skills_opt<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SkillsInput>::deserialize(deserializer)?.map(SkillsInput::coerce))
}

/// 새로운 직원 레코드 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 모든 필수 필드가 존재해야 하며, 문자열은 비어 있을 수 없고
/// 급여는 음수일 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// 비즈니스 키 (전역 유일, 생성 후 변경 불가)
    #[validate(length(min = 1, message = "employee_id는 비어 있을 수 없습니다"))]
    pub employee_id: String,

    /// 직원 이름
    #[validate(length(min = 1, message = "name은 비어 있을 수 없습니다"))]
    pub name: String,

    /// 소속 부서
    #[validate(length(min = 1, message = "department는 비어 있을 수 없습니다"))]
    pub department: String,

    /// 급여 (0 이상)
    #[validate(range(min = 0.0, message = "salary는 0 이상이어야 합니다"))]
    pub salary: f64,

    /// 입사일 (`YYYY-MM-DD`)
    pub joining_date: NaiveDate,

    /// 보유 기술 목록 (생략 시 빈 목록)
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: Vec<String>,
}

/// 직원 부분 수정을 위한 요청 DTO
///
/// 모든 필드가 선택적이며, 제공된 필드만 필드 단위로 덮어씁니다
/// (필드 내부 병합 없음). 인식하지 못하는 필드는 엄격히 거부됩니다.
/// `employee_id`는 불변 비즈니스 키이므로 수정 대상이 아니며,
/// 포함 시 알 수 없는 필드로 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, message = "name은 비어 있을 수 없습니다"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "department는 비어 있을 수 없습니다"))]
    pub department: Option<String>,

    #[validate(range(min = 0.0, message = "salary는 0 이상이어야 합니다"))]
    pub salary: Option<f64>,

    pub joining_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_skills_opt")]
    pub skills: Option<Vec<String>>,
}

impl UpdateEmployeeRequest {
    /// 제공된 필드가 하나도 없는지 확인합니다.
    ///
    /// 빈 수정 요청은 저장소 호출 이전에 검증 단계에서 거부됩니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.joining_date.is_none()
            && self.skills.is_none()
    }

    /// `$set` 연산에 사용할 업데이트 문서를 생성합니다.
    ///
    /// 제공된 필드만 포함되며, `joining_date`는 UTC 자정 인스턴트로
    /// 변환됩니다.
    pub fn to_update_document(&self) -> Document {
        let mut update = Document::new();

        if let Some(ref name) = self.name {
            update.insert("name", name.as_str());
        }
        if let Some(ref department) = self.department {
            update.insert("department", department.as_str());
        }
        if let Some(salary) = self.salary {
            update.insert("salary", salary);
        }
        if let Some(joining_date) = self.joining_date {
            update.insert("joining_date", date_utils::to_utc_midnight(joining_date));
        }
        if let Some(ref skills) = self.skills {
            update.insert("skills", skills.clone());
        }

        update
    }
}

/// 직원 목록 조회 쿼리 파라미터
///
/// 부서 일치 필터(선택)와 최대 반환 개수를 지정합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEmployeesQuery {
    /// 부서 정확 일치 필터
    pub department: Option<String>,
    /// 최대 반환 개수 (기본값: 100)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;
    use serde_json::json;

    fn valid_create_payload() -> serde_json::Value {
        json!({
            "employee_id": "E1",
            "name": "A",
            "department": "Eng",
            "salary": 1000,
            "joining_date": "2023-01-15"
        })
    }

    #[test]
    fn test_skills_comma_separated_string_is_split() {
        let mut payload = valid_create_payload();
        payload["skills"] = json!("a,b,c");

        let request: CreateEmployeeRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.skills, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_skills_comma_string_trims_and_drops_empty_segments() {
        let mut payload = valid_create_payload();
        payload["skills"] = json!(" rust , mongodb ,, actix ");

        let request: CreateEmployeeRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.skills, vec!["rust", "mongodb", "actix"]);
    }

    #[test]
    fn test_skills_single_string_becomes_one_element_list() {
        let mut payload = valid_create_payload();
        payload["skills"] = json!("a");

        let request: CreateEmployeeRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.skills, vec!["a"]);
    }

    #[test]
    fn test_skills_sequence_used_as_is() {
        let mut payload = valid_create_payload();
        payload["skills"] = json!(["x", "y"]);

        let request: CreateEmployeeRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.skills, vec!["x", "y"]);
    }

    #[test]
    fn test_skills_absent_defaults_to_empty_list() {
        let request: CreateEmployeeRequest =
            serde_json::from_value(valid_create_payload()).unwrap();
        assert!(request.skills.is_empty());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let mut payload = valid_create_payload();
        payload["name"] = json!("");

        let request: CreateEmployeeRequest = serde_json::from_value(payload).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_rejects_negative_salary() {
        let mut payload = valid_create_payload();
        payload["salary"] = json!(-1);

        let request: CreateEmployeeRequest = serde_json::from_value(payload).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_rejects_missing_required_field() {
        let payload = json!({
            "employee_id": "E1",
            "name": "A",
            "department": "Eng",
            "salary": 1000
        });

        assert!(serde_json::from_value::<CreateEmployeeRequest>(payload).is_err());
    }

    #[test]
    fn test_create_ignores_unknown_fields() {
        let mut payload = valid_create_payload();
        payload["nickname"] = json!("ace");

        let request: CreateEmployeeRequest = serde_json::from_value(payload).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_unknown_field() {
        let payload = json!({ "nickname": "ace" });

        assert!(serde_json::from_value::<UpdateEmployeeRequest>(payload).is_err());
    }

    #[test]
    fn test_update_rejects_employee_id_field() {
        // 비즈니스 키는 불변이므로 수정 대상이 아니다
        let payload = json!({ "employee_id": "E2" });

        assert!(serde_json::from_value::<UpdateEmployeeRequest>(payload).is_err());
    }

    #[test]
    fn test_update_empty_payload_has_no_fields() {
        let request: UpdateEmployeeRequest = serde_json::from_value(json!({})).unwrap();

        assert!(request.is_empty());
        assert!(request.to_update_document().is_empty());
    }

    #[test]
    fn test_update_null_fields_treated_as_absent() {
        let request: UpdateEmployeeRequest =
            serde_json::from_value(json!({ "name": null, "skills": null })).unwrap();

        assert!(request.is_empty());
    }

    #[test]
    fn test_update_skills_coercion_applies() {
        let request: UpdateEmployeeRequest =
            serde_json::from_value(json!({ "skills": "rust, mongodb" })).unwrap();

        assert_eq!(request.skills, Some(vec!["rust".to_string(), "mongodb".to_string()]));
    }

    #[test]
    fn test_update_document_contains_only_supplied_fields() {
        let request: UpdateEmployeeRequest =
            serde_json::from_value(json!({ "salary": 2000 })).unwrap();
        let update = request.to_update_document();

        assert_eq!(update.len(), 1);
        assert_eq!(update.get_f64("salary").unwrap(), 2000.0);
    }

    #[test]
    fn test_update_document_converts_joining_date_to_utc_midnight() {
        let request: UpdateEmployeeRequest =
            serde_json::from_value(json!({ "joining_date": "2024-02-29" })).unwrap();
        let update = request.to_update_document();

        match update.get("joining_date") {
            Some(Bson::DateTime(instant)) => {
                assert_eq!(
                    instant.to_chrono().to_rfc3339(),
                    "2024-02-29T00:00:00+00:00"
                );
            }
            other => panic!("expected BSON datetime, got {:?}", other),
        }
    }

    #[test]
    fn test_list_query_default_limit() {
        let query: ListEmployeesQuery = serde_json::from_value(json!({})).unwrap();

        assert_eq!(query.limit, 100);
        assert!(query.department.is_none());
    }
}
