//! 직원 응답 DTO
//!
//! 저장된 문서(내부 표현)를 외부 JSON 표현으로 직렬화합니다.
//! 저장소 식별자 `_id`는 16진수 문자열 `id` 필드로 노출되고,
//! `joining_date` 인스턴트는 시간 성분을 버린 달력 날짜 문자열로 변환됩니다.
//! 나머지 필드는 변경 없이 그대로 전달됩니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Employee;
use crate::utils::date_utils;

/// 직원 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// 저장소 할당 식별자 (ObjectId 16진수 문자열)
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: f64,
    /// 입사일 (`YYYY-MM-DD`)
    pub joining_date: String,
    pub skills: Vec<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let Employee {
            id,
            employee_id,
            name,
            department,
            salary,
            joining_date,
            skills,
        } = employee;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            employee_id,
            name,
            department,
            salary,
            joining_date: date_utils::to_date_string(joining_date),
            skills,
        }
    }
}

/// 직원 삭제 확인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEmployeeResponse {
    pub detail: String,
}

impl DeleteEmployeeResponse {
    /// 삭제 완료 확인 응답을 생성합니다.
    pub fn deleted() -> Self {
        Self {
            detail: "employee deleted".to_string(),
        }
    }
}
