pub mod fe_cr_co_c_n;
