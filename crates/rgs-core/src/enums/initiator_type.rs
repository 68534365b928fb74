//! EGISZ IEMK classifier of telemedicine consultation initiators.
//!
//! Reference book OID 1.2.643.2.69.1.1.1.129.

reference_enum! {
    /// Who initiated a telemedicine consultation.
    pub enum InitiatorType: i32 {
        Department = 1,
        Institution = 2,
        Physician = 3,
        AttendingPhysician = 4,
        Patient = 5,
        Payer = 6,
        Registrar = 7,
        DepartmentOfResidence = 8,
        Resident = 9,
        Intern = 10,
    }
}
