//! Employee Entity Implementation
//!
//! 직원 엔티티의 핵심 구현체입니다.
//! MongoDB `employees` 컬렉션의 문서 구조와 1:1로 대응합니다.

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::utils::date_utils;

/// 직원 엔티티
///
/// 시스템의 모든 직원 레코드를 표현하는 핵심 도메인 엔티티입니다.
///
/// - `id`는 저장소가 생성 시점에 할당하는 불투명 식별자로, 클라이언트가
///   제공할 수 없습니다.
/// - `employee_id`는 외부에서 의미를 갖는 비즈니스 키이며, 저장소의
///   유니크 인덱스로 전역 유일성이 보장됩니다. 생성 이후 변경되지 않습니다.
/// - `joining_date`는 UTC 자정으로 정규화된 인스턴트로 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 비즈니스 키 (unique)
    pub employee_id: String,
    /// 직원 이름
    pub name: String,
    /// 소속 부서
    pub department: String,
    /// 급여 (0 이상)
    pub salary: f64,
    /// 입사일 (UTC 자정 인스턴트)
    pub joining_date: DateTime,
    /// 보유 기술 목록 (없으면 빈 배열, null 아님)
    pub skills: Vec<String>,
}

impl Employee {
    /// 검증이 끝난 필드들로 새 직원 엔티티를 생성합니다.
    ///
    /// 달력 날짜는 이 시점에 UTC 자정 인스턴트로 변환됩니다.
    /// `id`는 저장소가 할당하므로 `None`으로 시작합니다.
    pub fn new(
        employee_id: String,
        name: String,
        department: String,
        salary: f64,
        joining_date: NaiveDate,
        skills: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            employee_id,
            name,
            department,
            salary,
            joining_date: date_utils::to_utc_midnight(joining_date),
            skills,
        }
    }

    /// 저장소 식별자를 16진수 문자열로 변환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_has_no_store_id() {
        let employee = Employee::new(
            "E1".to_string(),
            "A".to_string(),
            "Eng".to_string(),
            1000.0,
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            vec![],
        );

        assert!(employee.id.is_none());
        assert!(employee.id_string().is_none());
    }

    #[test]
    fn test_joining_date_normalized_to_utc_midnight() {
        let employee = Employee::new(
            "E1".to_string(),
            "A".to_string(),
            "Eng".to_string(),
            1000.0,
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            vec![],
        );

        let stored = employee.joining_date.to_chrono();
        assert_eq!(stored.to_rfc3339(), "2023-01-15T00:00:00+00:00");
    }
}
