//! # 직원 관리 서비스 구현
//!
//! 직원 레코드의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 요청 검증, 저장소 연산, 응답 직렬화를 연산별로 조합하는 오케스트레이션
//! 계층이며, 서비스의 공개 계약에 해당합니다.
//!
//! ## 연산별 구성
//!
//! | 연산 | 단계 | 실패 모드 |
//! |------|------|-----------|
//! | 생성 | 검증 → 삽입 → 재조회 → 직렬화 | 400 검증 / 409 중복 / 500 저장소 |
//! | 조회 | 비즈니스 키 조회 → 직렬화 | 404 없음 |
//! | 목록 | 필터+정렬 조회 → 각각 직렬화 | 500 저장소 |
//! | 수정 | 검증 → 빈 필드 거부 → 부분 수정 → 직렬화 | 400 / 404 / 500 |
//! | 삭제 | 삭제 | 404 없음 |
//!
//! 모든 연산은 호출자 관점에서 전부-또는-전무입니다. 부분 성공 상태는
//! 존재하지 않습니다.

use validator::Validate;

use crate::domain::dto::{
    CreateEmployeeRequest, DeleteEmployeeResponse, EmployeeResponse, UpdateEmployeeRequest,
};
use crate::domain::entities::Employee;
use crate::errors::{AppError, AppResult};
use crate::repositories::EmployeeRepository;

/// 직원 관리 비즈니스 로직 서비스
///
/// 전역 상태 없이 리포지토리를 명시적으로 주입받아 생성되며,
/// `actix_web::web::Data`로 핸들러에 공유됩니다.
/// 상태를 공유하는 필드는 리포지토리 하나뿐이므로 요청 간 간섭이 없습니다.
#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    /// 리포지토리를 주입받아 서비스를 생성합니다.
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    /// 새 직원 레코드를 생성합니다.
    ///
    /// 검증 → 엔티티 변환(UTC 자정 정규화) → 삽입 → 재조회 → 직렬화 순으로
    /// 진행합니다. 중복 `employee_id`는 저장소 유니크 인덱스가 감지하며
    /// 사전 조회하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필수 필드 누락, 빈 문자열, 음수 급여
    /// * `AppError::ConflictError` - `employee_id` 중복
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn create_employee(
        &self,
        request: CreateEmployeeRequest,
    ) -> AppResult<EmployeeResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let employee = Employee::new(
            request.employee_id,
            request.name,
            request.department,
            request.salary,
            request.joining_date,
            request.skills,
        );

        let inserted_id = self.repo.insert(&employee).await?;

        // 저장소가 할당한 식별자를 포함한 전체 레코드 재조회
        let created = self.repo.find_by_id(inserted_id).await?.ok_or_else(|| {
            AppError::InternalError("생성된 직원 레코드를 재조회하지 못했습니다".to_string())
        })?;

        Ok(created.into())
    }

    /// 비즈니스 키로 직원을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 일치하는 레코드 없음
    pub async fn get_employee(&self, employee_id: &str) -> AppResult<EmployeeResponse> {
        self.repo
            .find_by_employee_id(employee_id)
            .await?
            .map(EmployeeResponse::from)
            .ok_or_else(|| AppError::NotFound("employee not found".to_string()))
    }

    /// 직원 목록을 조회합니다.
    ///
    /// 부서 필터(선택)를 적용하고 입사일 내림차순(최신 우선)으로
    /// 최대 `limit`개를 반환합니다. 결과가 없으면 빈 목록입니다.
    pub async fn list_employees(
        &self,
        department: Option<&str>,
        limit: i64,
    ) -> AppResult<Vec<EmployeeResponse>> {
        let employees = self.repo.list(department, limit).await?;

        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// 직원 레코드를 부분 수정합니다.
    ///
    /// 인식된 필드가 하나도 없는 요청은 저장소 호출 없이 검증 단계에서
    /// 거부됩니다. 제공된 필드만 필드 단위로 덮어쓰며, 수정 후의 전체
    /// 레코드를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 필드 집합 또는 잘못된 필드 값
    /// * `AppError::NotFound` - 일치하는 `employee_id` 없음
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn update_employee(
        &self,
        employee_id: &str,
        request: UpdateEmployeeRequest,
    ) -> AppResult<EmployeeResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if request.is_empty() {
            return Err(AppError::ValidationError("no fields to update".to_string()));
        }

        let update = request.to_update_document();

        self.repo
            .update_partial(employee_id, update)
            .await?
            .map(EmployeeResponse::from)
            .ok_or_else(|| AppError::NotFound("employee not found".to_string()))
    }

    /// 직원 레코드를 삭제합니다. 복구할 수 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 일치하는 레코드 없음 (영향받은 행 0)
    pub async fn delete_employee(&self, employee_id: &str) -> AppResult<DeleteEmployeeResponse> {
        if self.repo.delete(employee_id).await? {
            Ok(DeleteEmployeeResponse::deleted())
        } else {
            Err(AppError::NotFound("employee not found".to_string()))
        }
    }
}
