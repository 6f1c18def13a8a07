//! # Employee Management HTTP Handlers
//!
//! 직원 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! RESTful API 설계 원칙을 따릅니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/employees` | 새 직원 생성 | 201 Created |
//! | `GET` | `/employees` | 직원 목록 조회 (부서 필터/개수 제한) | 200 OK |
//! | `GET` | `/employees/{employee_id}` | 직원 조회 | 200 OK |
//! | `PUT` | `/employees/{employee_id}` | 직원 부분 수정 | 200 OK |
//! | `DELETE` | `/employees/{employee_id}` | 직원 삭제 | 200 OK |
//!
//! 경로 파라미터의 `employee_id`는 저장소 할당 id가 아닌 비즈니스 키입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::dto::{CreateEmployeeRequest, ListEmployeesQuery, UpdateEmployeeRequest};
use crate::errors::AppError;
use crate::services::employees::EmployeeService;

/// 새 직원 레코드를 생성합니다.
///
/// 성공 시 저장소가 할당한 `id`를 포함한 전체 레코드를 201로 반환합니다.
/// 중복 `employee_id`는 409, 검증 실패는 400입니다.
#[post("")]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create_employee(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// 직원 목록을 조회합니다.
///
/// `department` 쿼리로 부서 정확 일치 필터를, `limit`으로 최대 개수를
/// 지정합니다 (기본값 100). 입사일 내림차순으로 정렬됩니다.
#[get("")]
pub async fn list_employees(
    service: web::Data<EmployeeService>,
    query: web::Query<ListEmployeesQuery>,
) -> Result<HttpResponse, AppError> {
    let ListEmployeesQuery { department, limit } = query.into_inner();
    let employees = service.list_employees(department.as_deref(), limit).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// 비즈니스 키로 직원을 조회합니다. 없으면 404입니다.
#[get("/{employee_id}")]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_employee(&employee_id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// 직원 레코드를 부분 수정합니다.
///
/// 제공된 필드만 수정됩니다. 인식된 필드가 하나도 없거나 알 수 없는
/// 필드가 포함되면 400, 대상이 없으면 404입니다.
#[put("/{employee_id}")]
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    employee_id: web::Path<String>,
    payload: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = service
        .update_employee(&employee_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// 직원 레코드를 삭제합니다. 없으면 404입니다.
#[delete("/{employee_id}")]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let acknowledgement = service.delete_employee(&employee_id).await?;
    Ok(HttpResponse::Ok().json(acknowledgement))
}
